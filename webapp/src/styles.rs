// Tailwind scans src/**/*.rs for class names, so every class here has to be
// spelled out as a complete literal.

pub const APP_SHELL: &str = "flex flex-col min-h-screen";

pub const SCREEN: &str = "flex flex-1 flex-col items-center justify-center bg-blue-500";
pub const CARD: &str = "bg-white p-8 rounded-2xl shadow-lg";
pub const TITLE: &str = "text-4xl font-bold text-blue-600 mb-4 text-center";
pub const COUNT: &str = "text-xl text-gray-700 mb-6 text-center";

pub const INCREMENT_BUTTON: &str = "block w-full bg-blue-500 px-6 py-4 rounded-lg active:bg-blue-600";
pub const RESET_BUTTON: &str = "block w-full bg-red-500 px-6 py-4 rounded-lg mt-3 active:bg-red-600";
pub const BUTTON_LABEL: &str = "text-white font-semibold text-center text-lg";

pub const BADGES: &str = "mt-8";

/// A decorative label under the card. Only the text color and trailing
/// margin differ between badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub class: &'static str,
}

pub const FEATURE_BADGES: [Badge; 3] = [
    Badge {
        text: "🎨 Colors Working",
        class: "text-white text-lg font-bold mb-2",
    },
    Badge {
        text: "📏 Spacing Working",
        class: "text-yellow-300 text-lg font-bold mb-2",
    },
    Badge {
        text: "✨ Styles Working",
        class: "text-green-300 text-lg font-bold",
    },
];
