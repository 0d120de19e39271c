//! Scroll-spy decision logic for the header navigation.
//!
//! Measurements come in through [`LayoutQuery`] so the decisions can be
//! driven by synthetic layouts in tests. The DOM-backed implementation lives
//! in `dom_layout`.

use crate::config::ScrollSpyConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Contact,
}

impl SectionId {
    /// Document order. Later entries win when several sections qualify.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// Element id of the section, also its `#fragment`.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Element id of the header link pointing at this section.
    pub fn nav_link_id(self) -> String {
        format!("nav-link-{}", self.as_str())
    }

    pub fn from_fragment(fragment: &str) -> Option<SectionId> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        SectionId::ALL.into_iter().find(|id| id.as_str() == fragment)
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::ALL[0]
    }
}

/// Horizontal placement of a nav link inside the nav bar.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct IndicatorBox {
    pub left: f64,
    pub width: f64,
}

impl IndicatorBox {
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px); width: {}px; opacity: 1;",
            self.left, self.width
        )
    }
}

pub trait LayoutQuery {
    /// Current vertical scroll offset of the scroll container.
    fn scroll_top(&self) -> f64;
    /// Top of the section element measured inside the scroll container.
    /// `None` when the element is not in the document.
    fn section_top(&self, id: SectionId) -> Option<f64>;
    /// Offset and width of the nav link for `id` within its container.
    fn nav_link_box(&self, id: SectionId) -> Option<IndicatorBox>;
}

/// Section that currently owns the top of the viewport.
///
/// Recomputed from the layout on every call, never from previous state.
pub fn active_section<L: LayoutQuery + ?Sized>(layout: &L, config: &ScrollSpyConfig) -> SectionId {
    let scroll_position = layout.scroll_top() + config.threshold;

    SectionId::ALL
        .iter()
        .rev()
        .copied()
        .find(|&id| {
            layout
                .section_top(id)
                .map_or(false, |top| top - config.margin <= scroll_position)
        })
        .unwrap_or_default()
}

/// Where the sliding indicator should sit for the `active` section.
pub fn indicator_for<L: LayoutQuery + ?Sized>(layout: &L, active: SectionId) -> Option<IndicatorBox> {
    layout.nav_link_box(active)
}

pub fn header_is_scrolled<L: LayoutQuery + ?Sized>(layout: &L, config: &ScrollSpyConfig) -> bool {
    layout.scroll_top() > config.scrolled_after
}

/// Fragment id of an in-page anchor href, or `None` for anything the browser
/// should handle itself (external URLs, `mailto:`, a bare `#`).
pub fn anchor_fragment(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Offset of an element's top inside a scrolled container, given both
/// bounding rects in viewport coordinates.
pub fn offset_within(container_scroll_top: f64, container_rect_top: f64, element_rect_top: f64) -> f64 {
    element_rect_top - container_rect_top + container_scroll_top
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct SyntheticLayout {
        scroll_top: f64,
        tops: HashMap<SectionId, f64>,
        links: HashMap<SectionId, IndicatorBox>,
    }

    impl SyntheticLayout {
        /// Sections at 0, 800, 1600 and 2800, links 100px apart.
        fn page() -> Self {
            let tops = [
                (SectionId::Home, 0.0),
                (SectionId::About, 800.0),
                (SectionId::Services, 1600.0),
                (SectionId::Contact, 2800.0),
            ]
            .into_iter()
            .collect();
            let links = SectionId::ALL
                .iter()
                .enumerate()
                .map(|(i, &id)| {
                    (
                        id,
                        IndicatorBox {
                            left: 20.0 + 100.0 * i as f64,
                            width: 60.0 + 5.0 * i as f64,
                        },
                    )
                })
                .collect();
            Self { scroll_top: 0.0, tops, links }
        }

        fn at(mut self, scroll_top: f64) -> Self {
            self.scroll_top = scroll_top;
            self
        }

        fn clone_at(&self, scroll_top: f64) -> Self {
            Self {
                scroll_top,
                tops: self.tops.clone(),
                links: self.links.clone(),
            }
        }

        fn without(mut self, id: SectionId) -> Self {
            self.tops.remove(&id);
            self.links.remove(&id);
            self
        }
    }

    impl LayoutQuery for SyntheticLayout {
        fn scroll_top(&self) -> f64 {
            self.scroll_top
        }

        fn section_top(&self, id: SectionId) -> Option<f64> {
            self.tops.get(&id).copied()
        }

        fn nav_link_box(&self, id: SectionId) -> Option<IndicatorBox> {
            self.links.get(&id).copied()
        }
    }

    fn active_at(scroll_top: f64) -> SectionId {
        active_section(&SyntheticLayout::page().at(scroll_top), &ScrollSpyConfig::default())
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_at(0.0), SectionId::Home);
    }

    #[test]
    fn each_section_activates_at_its_adjusted_top() {
        // adjusted top = top - margin(200); scroll position = scroll_top + threshold(150)
        // so a section with top T activates once scroll_top >= T - 350.
        assert_eq!(active_at(449.0), SectionId::Home);
        assert_eq!(active_at(450.0), SectionId::About);
        assert_eq!(active_at(1249.0), SectionId::About);
        assert_eq!(active_at(1250.0), SectionId::Services);
        assert_eq!(active_at(2449.0), SectionId::Services);
        assert_eq!(active_at(2450.0), SectionId::Contact);
        assert_eq!(active_at(10_000.0), SectionId::Contact);
    }

    #[test]
    fn below_first_adjusted_top_defaults_to_first_section() {
        let mut layout = SyntheticLayout::page();
        layout.tops.insert(SectionId::Home, 600.0);
        for scroll_top in [0.0, 100.0, 249.0] {
            assert_eq!(
                active_section(&layout.clone_at(scroll_top), &ScrollSpyConfig::default()),
                SectionId::Home
            );
        }
    }

    #[test]
    fn later_sections_win_when_several_qualify() {
        // Every section's adjusted top is below the scroll position.
        let mut layout = SyntheticLayout::page().at(5000.0);
        layout.tops.insert(SectionId::About, 0.0);
        assert_eq!(active_section(&layout, &ScrollSpyConfig::default()), SectionId::Contact);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout = SyntheticLayout::page().without(SectionId::Contact).at(5000.0);
        assert_eq!(active_section(&layout, &ScrollSpyConfig::default()), SectionId::Services);

        let empty = SyntheticLayout {
            scroll_top: 900.0,
            tops: HashMap::new(),
            links: HashMap::new(),
        };
        assert_eq!(active_section(&empty, &ScrollSpyConfig::default()), SectionId::Home);
    }

    /// Active section held the way the page holds it: only written when the
    /// recomputed value differs.
    struct TrackedSection {
        current: SectionId,
        writes: usize,
    }

    impl TrackedSection {
        fn on_scroll(&mut self, layout: &SyntheticLayout, config: &ScrollSpyConfig) {
            let next = active_section(layout, config);
            if next != self.current {
                self.current = next;
                self.writes += 1;
            }
        }
    }

    #[test]
    fn out_of_order_scroll_events_settle_on_last_offset() {
        let config = ScrollSpyConfig::default();
        let page = SyntheticLayout::page();
        // Coalesced and out-of-order offsets, as a fast fling might deliver them.
        let offsets = [2600.0, 10.0, 1300.0, 1300.0, 460.0, 3000.0, 0.0, 1900.0, 500.0];

        let mut tracked = TrackedSection { current: SectionId::default(), writes: 0 };
        for &offset in &offsets {
            tracked.on_scroll(&page.clone_at(offset), &config);
            assert_eq!(tracked.current, active_section(&page.clone_at(offset), &config));
        }

        let last = *offsets.last().unwrap();
        assert_eq!(tracked.current, active_section(&page.clone_at(last), &config));
        assert_eq!(tracked.current, SectionId::About);
        // The repeated 1300 offset does not write twice.
        assert_eq!(tracked.writes, 8);
    }

    #[test]
    fn custom_thresholds_shift_boundaries() {
        let config = ScrollSpyConfig {
            threshold: 0.0,
            margin: 0.0,
            ..ScrollSpyConfig::default()
        };
        let layout = SyntheticLayout::page();
        assert_eq!(active_section(&layout.clone_at(799.0), &config), SectionId::Home);
        assert_eq!(active_section(&layout.clone_at(800.0), &config), SectionId::About);
    }

    #[test]
    fn indicator_tracks_active_link() {
        let layout = SyntheticLayout::page();
        for id in SectionId::ALL {
            assert_eq!(indicator_for(&layout, id), layout.links.get(&id).copied());
        }
        let layout = layout.at(1300.0);
        let active = active_section(&layout, &ScrollSpyConfig::default());
        assert_eq!(
            indicator_for(&layout, active),
            Some(IndicatorBox { left: 220.0, width: 70.0 })
        );
    }

    #[test]
    fn indicator_hidden_when_link_missing() {
        let layout = SyntheticLayout::page().without(SectionId::About);
        assert_eq!(indicator_for(&layout, SectionId::About), None);
    }

    #[test]
    fn header_scrolled_past_offset() {
        let config = ScrollSpyConfig::default();
        assert!(!header_is_scrolled(&SyntheticLayout::page().at(40.0), &config));
        assert!(header_is_scrolled(&SyntheticLayout::page().at(41.0), &config));
    }

    #[test]
    fn fragments_from_hrefs() {
        assert_eq!(anchor_fragment("#services"), Some("services"));
        assert_eq!(anchor_fragment("#"), None);
        assert_eq!(anchor_fragment(""), None);
        assert_eq!(anchor_fragment("mailto:office@strad.at"), None);
        assert_eq!(anchor_fragment("https://www.linkedin.com/#about"), None);
    }

    #[test]
    fn section_ids_round_trip_through_fragments() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_fragment(&id.href()), Some(id));
            assert_eq!(SectionId::from_fragment(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::from_fragment("#pricing"), None);
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn offset_within_accounts_for_container_scroll() {
        // Container starts 74px down the viewport and is scrolled 500px.
        assert_eq!(offset_within(500.0, 74.0, 374.0), 800.0);
        assert_eq!(offset_within(0.0, 0.0, 0.0), 0.0);
    }
}
