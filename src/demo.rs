//! Generated demo pages.
//!
//! Produces a plausible page layout without a file on disk, for trying the
//! interactions out. Generation is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::layout::{
    CarouselLayout, ItemLayout, LinkLayout, PageLayout, PanelLayout, SectionLayout,
    SECTION_HEADING_HEIGHT,
};

/// Seed used by the GUI's "Demo page" button.
pub const DEMO_SEED: u64 = 42;

const TOPICS: [&str; 8] = [
    "Wetlands", "Pollinators", "Green roofs", "Compost", "Rain gardens", "Solar", "Seed library",
    "Tree survey",
];

/// Generates a demo page for `seed`.
pub fn generate_demo_layout(seed: u64) -> PageLayout {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut sections = vec![SectionLayout {
        id: Some("intro".to_string()),
        title: "Eco projects".to_string(),
        height: rng.gen_range(420.0..560.0f64).round(),
        body: "Jump to a section from the links below.".to_string(),
        links: vec![
            LinkLayout { label: "Gallery".into(), href: "#gallery".into() },
            LinkLayout { label: "Field log".into(), href: "#log".into() },
            LinkLayout { label: "Last log entry".into(), href: "#entry-12".into() },
            LinkLayout { label: "Contact".into(), href: "./#contact".into() },
        ],
        panel: None,
        carousel: None,
    }];

    let slide_count = rng.gen_range(3..=6);
    sections.push(SectionLayout {
        id: Some("gallery".to_string()),
        title: "Gallery".to_string(),
        height: 460.0,
        body: String::new(),
        links: Vec::new(),
        panel: None,
        carousel: Some(CarouselLayout {
            slides: (0..slide_count)
                .map(|i| TOPICS[(i + seed as usize) % TOPICS.len()].to_string())
                .collect(),
        }),
    });

    for topic in TOPICS.iter().take(rng.gen_range(2..=4)) {
        sections.push(SectionLayout {
            id: Some(topic.to_lowercase().replace(' ', "-")),
            title: topic.to_string(),
            height: rng.gen_range(300.0..700.0f64).round(),
            body: format!("Notes on {}.", topic.to_lowercase()),
            links: vec![LinkLayout { label: "Back to intro".into(), href: "#intro".into() }],
            panel: None,
            carousel: None,
        });
    }

    let items = (1..=12)
        .map(|n| ItemLayout {
            id: Some(format!("entry-{}", n)),
            title: format!("Entry {}", n),
            height: rng.gen_range(60.0..120.0f64).round(),
        })
        .collect();
    sections.push(SectionLayout {
        id: Some("log".to_string()),
        title: "Field log".to_string(),
        height: SECTION_HEADING_HEIGHT + 320.0 + 40.0,
        body: String::new(),
        links: Vec::new(),
        panel: Some(PanelLayout { height: 320.0, items }),
        carousel: None,
    });

    sections.push(SectionLayout {
        id: Some("contact".to_string()),
        title: "Contact".to_string(),
        height: 360.0,
        body: "Write to the volunteers' mailbox.".to_string(),
        links: vec![LinkLayout { label: "Top of the page".into(), href: "#intro".into() }],
        panel: None,
        carousel: None,
    });

    PageLayout {
        origin: "https://example.org".to_string(),
        path: "/projects/".to_string(),
        viewport_height: 720.0,
        header_height: Some(64.0),
        menu: true,
        nav_links: vec![
            LinkLayout { label: "Projects".into(), href: "/#projects".into() },
            LinkLayout { label: "Eco".into(), href: "/projects/".into() },
            LinkLayout { label: "Gallery".into(), href: "#gallery".into() },
            LinkLayout { label: "About".into(), href: "/about.html".into() },
        ],
        back_to_top: true,
        sections,
    }
}
