#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// CSS class carrying the card accent gradient.
    pub accent: &'static str,
}

pub static SERVICES: [ServiceOption; 4] = [
    ServiceOption {
        id: "led-walls",
        name: "LED Walls",
        description: "High-brightness, modular panels.",
        icon: "🖥",
        accent: "accent-purple",
    },
    ServiceOption {
        id: "led-tvs",
        name: "LED TVs",
        description: "55–85\" displays for VIP/FOH.",
        icon: "📺",
        accent: "accent-blue",
    },
    ServiceOption {
        id: "live-streaming",
        name: "Internet Live Streaming",
        description: "Multi-cam, RTMP/YouTube/Zoom.",
        icon: "📡",
        accent: "accent-orange",
    },
    ServiceOption {
        id: "drone-coverage",
        name: "Drone Coverage",
        description: "Cinematic aerial shots (licensed pilots).",
        icon: "🚁",
        accent: "accent-green",
    },
];

pub static ADD_ONS: [&str; 4] = [
    "On-site tech team",
    "Backup internet",
    "Multi-camera switcher",
    "Stage lighting",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustBadge {
    pub icon: &'static str,
    pub text: &'static str,
}

pub static TRUST_BADGES: [TrustBadge; 3] = [
    TrustBadge { icon: "⏱", text: "Same-day Setup" },
    TrustBadge { icon: "🛡", text: "Pan-India Ops" },
    TrustBadge { icon: "🎧", text: "24×7 Support" },
];

pub fn find_service(id: &str) -> Option<&'static ServiceOption> {
    SERVICES.iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_service("drone-coverage").map(|s| s.name), Some("Drone Coverage"));
        assert!(find_service("fog-machine").is_none());
    }
}
