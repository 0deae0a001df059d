//! Static page content: service verticals, partner logos and the layout of
//! the services page as a document tree for the reveal choreography.

use mythought_motion::{LogoItem, PageNode};

/// Class carried by every card that animates in on scroll
pub const REVEAL_CLASS: &str = "reveal-marker";
/// Id of the scrollable services section
pub const SERVICES_ROOT: &str = "services";

/// Rows taken by the intro block at the top of the services page
pub const INTRO_HEIGHT: u16 = 4;
pub const CARD_HEIGHT: u16 = 7;
pub const CARD_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertical {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub highlights: [&'static str; 3],
}

pub const VERTICALS: [Vertical; 7] = [
    Vertical {
        id: "fintech",
        title: "Fintech",
        tagline: "Payment rails, ledgers and compliance built to scale",
        highlights: ["Core banking integrations", "Real-time risk scoring", "Regulatory reporting"],
    },
    Vertical {
        id: "design",
        title: "Design",
        tagline: "Brands and products people remember",
        highlights: ["Design systems", "Product discovery", "Motion and interaction"],
    },
    Vertical {
        id: "talent",
        title: "Talent",
        tagline: "Senior teams, assembled in weeks",
        highlights: ["Embedded squads", "Technical hiring", "Leadership coaching"],
    },
    Vertical {
        id: "ventures",
        title: "Ventures",
        tagline: "From first idea to first customers",
        highlights: ["Venture building", "MVP sprints", "Go-to-market"],
    },
    Vertical {
        id: "consultancy",
        title: "Consultancy",
        tagline: "Strategy that survives contact with engineering",
        highlights: ["Architecture reviews", "Digital roadmaps", "Due diligence"],
    },
    Vertical {
        id: "ai-analytics",
        title: "AI Analytics",
        tagline: "Models and dashboards that pay for themselves",
        highlights: ["Data platforms", "Forecasting", "LLM assistants"],
    },
    Vertical {
        id: "blog",
        title: "Blog",
        tagline: "Notes from the studio floor",
        highlights: ["Case studies", "Engineering deep dives", "Team stories"],
    },
];

/// Partner names shown in the marquee
pub const PARTNERS: [&str; 8] = [
    "Northwind", "Aurora Pay", "Helix", "Lumen Labs", "Quanta", "Bluefin", "Verdant", "Orbital",
];

pub fn partner_logos() -> Vec<LogoItem> {
    PARTNERS
        .iter()
        .map(|name| LogoItem::new(name.to_lowercase().replace(' ', "-"), *name))
        .collect()
}

/// Row at which the card of vertical `index` starts
pub fn card_top(index: usize) -> u16 {
    let index = u16::try_from(index).unwrap_or(u16::MAX);
    INTRO_HEIGHT.saturating_add(index.saturating_mul(CARD_HEIGHT + CARD_GAP))
}

/// Total height of the services page
pub fn services_height() -> u16 {
    card_top(VERTICALS.len())
}

/// The services page as a document: an intro block followed by one marked
/// card per vertical
pub fn services_document() -> PageNode {
    let section = VERTICALS.iter().enumerate().fold(
        PageNode::new(SERVICES_ROOT, 0, services_height())
            .with_child(PageNode::new("services-intro", 0, INTRO_HEIGHT)),
        |section, (index, vertical)| {
            section.with_child(
                PageNode::new(vertical.id, card_top(index), CARD_HEIGHT).with_class(REVEAL_CLASS),
            )
        },
    );
    PageNode::new("page", 0, services_height()).with_child(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_vertical_is_a_marked_card() {
        let document = services_document();
        for (index, vertical) in VERTICALS.iter().enumerate() {
            let node = document.find(vertical.id).unwrap();
            assert!(node.has_class(REVEAL_CLASS));
            assert_eq!(node.top, card_top(index));
        }
        assert!(!document.find("services-intro").unwrap().has_class(REVEAL_CLASS));
    }

    #[test]
    fn test_cards_do_not_overlap() {
        let document = services_document();
        let tops: Vec<u16> = VERTICALS
            .iter()
            .map(|v| document.find(v.id).unwrap().top)
            .collect();
        for pair in tops.windows(2) {
            assert!(pair[1] >= pair[0] + CARD_HEIGHT);
        }
        assert_eq!(services_height(), INTRO_HEIGHT + 7 * (CARD_HEIGHT + CARD_GAP));
    }

    #[test]
    fn test_partner_ids() {
        let logos = partner_logos();
        assert_eq!(logos.len(), PARTNERS.len());
        assert_eq!(logos[1].id, "aurora-pay");
        assert_eq!(logos[1].label, "Aurora Pay");
    }
}
