pub const CONTAINER: &str = "min-h-screen w-full px-4 sm:px-6 lg:px-8 py-8";
pub const LAYOUT: &str = "max-w-5xl mx-auto grid gap-8 md:grid-cols-[1fr_20rem] items-start";
pub const CARD: &str = "bg-white/80 dark:bg-gray-800 rounded-2xl shadow-lg border-2 border-[#201c1a] p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-pink-500 to-pink-600 hover:from-pink-600 hover:to-pink-700 shadow transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-yellow-50 dark:hover:bg-gray-700";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-pink-600 dark:hover:text-pink-400 rounded-lg transition-colors duration-200";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-pink-500";
pub const INPUT_ERROR: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500";
pub const TEXT_H1: &str = "text-3xl font-bold text-[#201c1a] dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-700 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "mt-2 text-sm text-red-500 dark:text-red-400";
