/// Viewport offset the sections are probed against, in px from the top.
pub const PROBE_OFFSET_PX: f64 = 100.0;

pub const SECTION_IDS: [&str; 5] = ["hero", "about", "skills", "projects", "contact"];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// First section in list order whose bounding box straddles the probe line.
pub fn active_section<'a>(sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    sections
        .iter()
        .find(|section| section.top <= PROBE_OFFSET_PX && section.bottom >= PROBE_OFFSET_PX)
        .map(|section| section.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<'a>(id: &'a str, top: f64, bottom: f64) -> SectionBounds<'a> {
        SectionBounds { id, top, bottom }
    }

    #[test]
    fn section_straddling_the_probe_line_wins() {
        let sections = [
            bounds("hero", -800.0, 20.0),
            bounds("about", 20.0, 700.0),
            bounds("skills", 700.0, 1400.0),
        ];

        assert_eq!(active_section(&sections), Some("about"));
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let sections = [bounds("hero", 0.0, 400.0), bounds("about", 50.0, 900.0)];
        assert_eq!(active_section(&sections), Some("hero"));
    }

    #[test]
    fn no_straddling_section_yields_none() {
        let sections = [bounds("hero", 200.0, 900.0)];
        assert_eq!(active_section(&sections), None);
        assert_eq!(active_section(&[]), None);
    }

    #[test]
    fn touching_the_probe_line_counts() {
        let sections = [bounds("skills", 100.0, 600.0)];
        assert_eq!(active_section(&sections), Some("skills"));
    }

    #[test]
    fn probe_order_matches_the_page_layout() {
        assert_eq!(SECTION_IDS.first(), Some(&"hero"));
        assert_eq!(SECTION_IDS.last(), Some(&"contact"));
    }
}
