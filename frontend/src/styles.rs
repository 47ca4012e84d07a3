pub const SCENE: &str = "min-h-screen w-full bg-gradient-to-b from-white to-red-50 flex flex-col items-center px-4 sm:px-6 lg:px-8 py-10";
pub const SCENE_TITLE: &str = "text-5xl md:text-7xl font-black uppercase text-center text-[#E30613] mb-10 tracking-tight";
pub const SCENE_TIMER: &str = "mb-12";
pub const LINK: &str = "text-red-600 hover:text-red-700 transition-colors duration-200";

// Countdown
pub const TIMER_DIGITS: &str = "font-mono font-black tabular-nums text-7xl md:text-9xl lg:text-[12rem] text-gray-900 leading-none";
pub const TIMER_TIMES_UP: &str = "font-black uppercase text-7xl md:text-9xl lg:text-[10rem] text-[#E30613] leading-none animate-pulse";
pub const BUTTON_TIMER_START: &str = "px-12 py-5 rounded-full text-3xl font-bold text-white bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 shadow-lg hover:shadow-xl transition-all duration-300";
pub const BUTTON_TIMER_RESTART: &str = "px-12 py-5 rounded-full text-3xl font-bold text-white bg-gradient-to-r from-red-500 to-red-600 hover:from-red-600 hover:to-red-700 shadow-lg hover:shadow-xl transition-all duration-300";

// Wheel
pub const WHEEL_LAYOUT: &str = "w-full max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-10 items-center";
pub const DISPLAY_SCREEN: &str = "min-h-[24rem] flex flex-col items-center justify-center text-center rounded-2xl bg-white shadow-xl border border-gray-200 p-8";
pub const BUTTON_SPIN: &str = "w-64 px-8 py-4 rounded-full font-bold text-2xl text-white bg-gradient-to-r from-red-500 to-red-700 hover:from-red-600 hover:to-red-800 shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 transition-all duration-300";
pub const BUTTON_SPIN_DISABLED: &str = "w-64 px-8 py-4 rounded-full font-bold text-2xl text-white bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed";

// Configuration panel
pub const PANEL: &str = "fixed top-4 left-4 z-40 w-80 max-h-[90vh] overflow-y-auto bg-white/90 backdrop-blur-md rounded-xl shadow-xl border border-gray-200/50 p-5";
pub const PANEL_RESTORE: &str = "fixed top-4 left-4 z-40 w-12 h-12 rounded-full bg-white/90 shadow-lg border border-gray-200 text-2xl hover:bg-gray-100 transition-colors duration-200";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white py-2 px-3 text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 focus:ring-2 focus:ring-red-600";
pub const BUTTON_ADD: &str = "w-full py-2 px-4 rounded-lg font-semibold text-white bg-red-600 hover:bg-red-700 disabled:bg-gray-400 disabled:cursor-not-allowed transition-colors duration-200";

// Winner modal
pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4";
pub const MODAL_CARD: &str = "w-full max-w-3xl rounded-3xl bg-white shadow-2xl p-8 sm:p-12 text-center";
pub const BUTTON_CLAIM: &str = "px-10 py-4 rounded-full text-2xl font-bold text-white bg-gradient-to-r from-red-500 to-red-700 hover:from-red-600 hover:to-red-800 shadow-lg transition-all duration-300";
