pub const PAGE: &str = "min-h-screen text-white";
pub const PAGE_BACKGROUND: &str = "fixed inset-0 bg-gradient-to-r from-black to-[#1a1a1a] -z-50";

// Header
pub const NAV: &str = "fixed top-0 left-0 right-0 z-[100] flex items-center justify-between px-16 py-8 bg-black/80 backdrop-blur-md";
pub const NAV_BRAND: &str = "text-3xl font-bold text-white";
pub const NAV_ITEMS: &str = "flex items-center gap-8";
pub const NAV_LINK: &str = "text-sm text-white cursor-pointer transition-colors duration-300 hover:text-[#007AFF]";
pub const NAV_LOGIN: &str = "px-6 py-3 rounded-md text-sm text-white bg-[#007AFF] hover:bg-[#0056b3] transition-colors duration-300";

// Hero section
pub const HERO_SECTION: &str = "relative h-screen flex items-center justify-center text-center px-8 overflow-hidden bg-[radial-gradient(circle_at_center,rgba(0,122,255,0.15)_0%,rgba(0,0,0,0)_70%)]";
pub const HERO_GLOW: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[80vw] h-[80vh] blur-[60px] bg-[radial-gradient(circle_at_center,rgba(0,122,255,0.1)_0%,rgba(0,0,0,0)_70%)] z-0";
pub const HERO_PARTICLES: &str = "absolute inset-0 w-full h-full z-[1]";
pub const HERO_SPHERE: &str = "absolute inset-0 w-full h-full z-[1] opacity-40 pointer-events-none";
pub const HERO_CONTENT: &str = "relative z-[2] transition-opacity duration-1000";
pub const HERO_TITLE: &str = "text-[10rem] md:text-[15rem] xl:text-[25rem] font-black leading-[0.8] tracking-tighter mb-8 text-transparent bg-clip-text bg-gradient-to-r from-white to-white/40 drop-shadow-[0_0_20px_rgba(255,255,255,0.2)] hover:scale-[1.02] transition-all duration-300";
pub const HERO_SUBTITLE: &str = "-mt-8 text-2xl md:text-[2rem] xl:text-5xl font-light tracking-[0.1em] text-white/80 transition-opacity duration-1000";

// Shared section pieces
pub const SECTION_TITLE: &str = "text-4xl mb-8 text-white text-center";
pub const SECTION_DARK: &str = "px-16 py-24 bg-[#111]";
pub const SECTION_DARKER: &str = "px-16 py-32 bg-[#0a0a0a]";
pub const BODY_TEXT: &str = "text-xl leading-relaxed text-white/80";

// About
pub const ABOUT_SECTION: &str = "relative overflow-hidden px-16 py-32 bg-[#111]";
pub const ABOUT_GRID: &str = "max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-16 items-center text-center lg:text-left";
pub const ABOUT_IMAGE: &str = "w-full max-w-[500px] h-auto mx-auto";
pub const ABOUT_BUTTON: &str = "px-8 py-3 rounded-full border-2 border-[#007AFF] text-[#007AFF] hover:bg-[#007AFF] hover:text-white hover:-translate-y-0.5 transition-all duration-300";

// Welcome
pub const WELCOME_TEXT: &str = "text-xl leading-loose text-white/80 max-w-[1000px] mx-auto text-center";
pub const FADE_HIDDEN: &str = "opacity-0 transition-opacity duration-700";
pub const FADE_VISIBLE: &str = "opacity-100 transition-opacity duration-700";

// Features and stats
pub const FEATURE_GRID: &str = "grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto";
pub const FEATURE_CARD: &str = "p-8 text-center rounded-lg bg-white/5 border border-white/10 backdrop-blur-md hover:-translate-y-1 transition-transform duration-300";
pub const FEATURE_ICON: &str = "text-5xl mb-4";
pub const FEATURE_TITLE: &str = "text-2xl text-white mb-4";
pub const FEATURE_TEXT: &str = "text-white/70 leading-relaxed";
pub const STAT_GRID: &str = "grid grid-cols-1 md:grid-cols-3 gap-8 max-w-[1000px] mx-auto";
pub const STAT_CARD: &str = "p-8 text-center rounded-2xl bg-white/5 backdrop-blur-md hover:-translate-y-1 transition-transform duration-300";
pub const STAT_NUMBER: &str = "text-6xl font-bold text-[#007AFF] mb-2";
pub const STAT_LABEL: &str = "text-lg text-white/70";

// Achievements
pub const ACHIEVEMENTS_SECTION: &str = "relative overflow-hidden px-16 py-32 bg-[#0a0a0a]";
pub const TAB_ROW: &str = "relative z-[1] flex flex-wrap justify-center gap-4 mb-16";
pub const TAB: &str = "px-8 py-3 rounded-full text-base border border-white/20 text-white/70 bg-transparent hover:bg-white/10 hover:border-[#007AFF] hover:-translate-y-0.5 transition-all duration-300";
pub const TAB_ACTIVE: &str = "px-8 py-3 rounded-full text-base border border-[#007AFF] text-white bg-[#007AFF] hover:-translate-y-0.5 transition-all duration-300";
pub const ACHIEVEMENT_GRID: &str = "relative z-[1] grid grid-cols-[repeat(auto-fit,minmax(300px,1fr))] gap-8 max-w-6xl mx-auto";
pub const ACHIEVEMENT_CARD: &str = "achievement-card relative overflow-hidden p-8 rounded-2xl bg-white/5 border border-white/10 backdrop-blur-md hover:-translate-y-1 hover:border-[#007AFF]/30 hover:shadow-xl transition-all duration-300";
pub const ACHIEVEMENT_ICON: &str = "text-[2.5rem] mb-4 drop-shadow-[0_0_10px_rgba(0,122,255,0.3)]";
pub const ACHIEVEMENT_TITLE: &str = "text-xl font-semibold text-white mb-2";
pub const ACHIEVEMENT_DATE: &str = "text-sm font-medium text-[#007AFF] mb-4";
pub const ACHIEVEMENT_TEXT: &str = "text-[0.95rem] leading-relaxed text-white/70";

// Footer
pub const FOOTER: &str = "bg-[#0a0a0a] px-16 pt-24 pb-8 text-white/80";
pub const FOOTER_GRID: &str = "max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-[1fr_1.5fr_1fr] gap-12 lg:gap-16";
pub const FOOTER_MARK: &str = "text-5xl text-[#007AFF] mb-4 font-serif italic";
pub const FOOTER_TAGLINE: &str = "italic text-sm leading-normal text-white/70";
pub const FOOTER_TITLE: &str = "text-xl font-semibold text-white mb-6";
pub const FOOTER_SOCIAL: &str = "flex gap-4 mt-8";
pub const FOOTER_SOCIAL_LINK: &str = "text-2xl text-white/70 hover:text-[#007AFF] transition-colors duration-300";
pub const FOOTER_CONTACT: &str = "flex items-start gap-4 text-sm leading-relaxed text-white/70";
pub const FOOTER_ICON: &str = "w-5 h-5 mt-0.5 shrink-0 text-[#007AFF]";
pub const FOOTER_LINK: &str = "text-sm text-white/70 hover:text-[#007AFF] transition-colors duration-300";
pub const FOOTER_MAP_LINK: &str = "text-[#007AFF] hover:underline";
pub const FOOTER_BOTTOM: &str = "max-w-6xl mx-auto mt-16 pt-8 border-t border-white/10 flex flex-col md:flex-row flex-wrap items-center justify-between gap-4 text-center md:text-left";
pub const FOOTER_BOTTOM_TEXT: &str = "text-sm text-white/50";
pub const FOOTER_BOTTOM_LINK: &str = "text-sm text-white/50 hover:text-[#007AFF] transition-colors duration-300";
