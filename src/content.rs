//! Copy shown on the landing page. None of it is fetched; it ships with the binary.

use crate::components::icons::Icon;

pub const BRAND: &str = "ClipForge";
pub const BRAND_ACCENT: &str = "AI";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    Features,
    Dashboard,
    Pricing,
    Docs,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink::Features,
    NavLink::Dashboard,
    NavLink::Pricing,
    NavLink::Docs,
];

impl NavLink {
    pub fn label(self) -> &'static str {
        match self {
            NavLink::Features => "Features",
            NavLink::Dashboard => "Dashboard",
            NavLink::Pricing => "Pricing",
            NavLink::Docs => "Docs",
        }
    }

    /// In-page anchor. `#docs` has no section yet.
    pub fn href(self) -> &'static str {
        match self {
            NavLink::Features => "#features",
            NavLink::Dashboard => "#dashboard",
            NavLink::Pricing => "#pricing",
            NavLink::Docs => "#docs",
        }
    }
}

pub const HERO_BADGE: &str = "NEW: AUTO-POST TO TIKTOK & REELS";
pub const HERO_TITLE: &str = "Long Videos to Viral";
pub const HERO_TITLE_ACCENT: &str = "Shorts in Seconds.";
pub const HERO_SUBTITLE: &str = "ClipForge AI automatically scans your YouTube videos, detects the most viral moments, and creates high-engagement vertical clips. 100% Free.";

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub delay_ms: u32,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Link,
        title: "Connect Channel",
        description: "Paste your YouTube URL or login with Google. Connect your channel in seconds.",
        delay_ms: 100,
    },
    Feature {
        icon: Icon::Bell,
        title: "Detect Uploads",
        description: "System automatically detects new uploads. No manual refresh needed, ever.",
        delay_ms: 200,
    },
    Feature {
        icon: Icon::Zap,
        title: "Auto-Clip AI",
        description: "AI scans for viral moments using subtitles and engagement prediction. 9:16 ready.",
        delay_ms: 300,
    },
    Feature {
        icon: Icon::Share,
        title: "Auto-Post",
        description: "Automatically posts to YouTube Shorts, Instagram Reels, and TikTok.",
        delay_ms: 400,
    },
];

pub const PRICING_BULLETS: [&str; 5] = [
    "10 free clips per day",
    "Auto captions included",
    "No Watermark on free plan",
    "Viral moment detection",
    "Multi-platform auto-posting",
];

pub struct Plan {
    pub badge: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub note: &'static str,
    pub cta: &'static str,
    pub fine_print: &'static str,
}

pub const FREE_PLAN: Plan = Plan {
    badge: "Current Plan",
    name: "Free Forever",
    price: "$0",
    note: "No credit card required",
    cta: "Start Free Automation",
    fine_print: "By clicking, you agree to our Terms of Service",
};

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "2.4M+", label: "Clips Generated" },
    Stat { value: "50K+", label: "Active Creators" },
    Stat { value: "850M+", label: "Total Views" },
    Stat { value: "120K hrs", label: "Time Saved" },
];

/// Rows of the mocked dashboard. Purely illustrative.
pub struct DemoProject {
    pub title: &'static str,
    pub meta: &'static str,
    pub status: &'static str,
    pub detail: &'static str,
}

pub const DEMO_PROJECT: DemoProject = DemoProject {
    title: "The Future of AI - Podcast Ep. 42",
    meta: "Uploaded 2h ago • 45:12",
    status: "Processing...",
    detail: "8 clips detected",
};

pub const DEMO_CLIP_COUNT: u32 = 3;
pub const DEMO_CLIP_LENGTH: &str = "00:32";
pub const DEMO_SIDEBAR_ROWS: u32 = 4;

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Product",
        links: &["Features", "Auto-Post", "AI Captions", "Pricing"],
    },
    FooterColumn {
        heading: "Resources",
        links: &["Documentation", "API Reference", "Creator Blog", "Community"],
    },
    FooterColumn {
        heading: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Cookie Policy"],
    },
];

pub const SOCIAL_ICONS: [Icon; 3] = [Icon::Twitter, Icon::Instagram, Icon::Github];

pub const FOOTER_BLURB: &str = "The world's first truly free AI video automation platform. Built for creators, by creators.";
pub const COPYRIGHT: &str = "© 2024 ClipForge AI. All rights reserved.";
pub const STATUS_LINE: &str = "Status: All Systems Operational";
pub const BUILT_WITH: &str = "Built with Gemini AI";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_nav_links_with_matching_anchors() {
        assert_eq!(NAV_LINKS.len(), 4);
        for link in NAV_LINKS {
            assert_eq!(link.href(), format!("#{}", link.label().to_lowercase()));
        }
    }

    #[test]
    fn feature_reveals_are_staggered() {
        assert_eq!(FEATURES.len(), 4);
        let delays: Vec<u32> = FEATURES.iter().map(|f| f.delay_ms).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));

        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn single_free_plan() {
        assert_eq!(FREE_PLAN.price, "$0");
        assert_eq!(PRICING_BULLETS.len(), 5);
        assert!(PRICING_BULLETS.iter().all(|bullet| !bullet.is_empty()));
    }

    #[test]
    fn four_stat_tiles() {
        assert_eq!(STATS.len(), 4);
        assert!(STATS.iter().all(|stat| !stat.value.is_empty() && !stat.label.is_empty()));
    }

    #[test]
    fn footer_columns() {
        let headings: Vec<_> = FOOTER_COLUMNS.iter().map(|c| c.heading).collect();
        assert_eq!(headings, ["Product", "Resources", "Legal"]);
        assert_eq!(FOOTER_COLUMNS.iter().map(|c| c.links.len()).sum::<usize>(), 11);
        assert_eq!(SOCIAL_ICONS.len(), 3);
    }
}
