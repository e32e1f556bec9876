//! View Renderer — the pure mapping from a CV record to its display tree.
//!
//! One rule set for both origins: the extracted form and the enhanced result
//! render through this same function, parameterized only by which record is
//! passed. Rendering never mutates or reorders a sequence field; an empty
//! sequence renders as an empty list, not an error.

use crate::models::cv::CvRecord;

/// Link-relation attributes applied to every external link, so the opened
/// page cannot reach back through `window.opener` and no referrer leaks.
pub const SAFE_LINK_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNode {
    /// Section heading within the CV body.
    Heading(String),
    /// Labelled scalar value ("Email: ...").
    Field { label: &'static str, value: String },
    /// External link; the href is untrusted input and opens in a new tab
    /// with [`SAFE_LINK_REL`].
    Link {
        label: &'static str,
        href: String,
        text: String,
    },
    /// Plain text list entry.
    Text(String),
    /// List whose items appear exactly in supplied order; each item is a
    /// group of nodes.
    List(Vec<Vec<DisplayNode>>),
}

/// Maps a CV record to its display tree.
pub fn render_cv(cv: &CvRecord) -> Vec<DisplayNode> {
    let mut nodes = vec![DisplayNode::Field {
        label: "Name",
        value: cv.name.clone(),
    }];

    nodes.push(DisplayNode::Heading("Contact Information".to_string()));
    nodes.push(DisplayNode::Field {
        label: "Email",
        value: cv.contact.email.clone(),
    });
    nodes.push(DisplayNode::Link {
        label: "LinkedIn",
        href: cv.contact.linkedin.clone(),
        text: cv.contact.linkedin.clone(),
    });
    nodes.push(DisplayNode::Field {
        label: "Phone",
        value: cv.contact.phone.clone(),
    });

    nodes.push(DisplayNode::Heading("Skills".to_string()));
    nodes.push(DisplayNode::List(
        cv.skills
            .iter()
            .map(|skill| vec![DisplayNode::Text(skill.clone())])
            .collect(),
    ));

    nodes.push(DisplayNode::Heading("Technologies".to_string()));
    nodes.push(DisplayNode::List(
        cv.technologies
            .iter()
            .map(|tech| vec![DisplayNode::Text(tech.clone())])
            .collect(),
    ));

    nodes.push(DisplayNode::Heading("Experience".to_string()));
    nodes.push(DisplayNode::List(
        cv.experience
            .iter()
            .map(|exp| {
                vec![
                    DisplayNode::Field {
                        label: "Title",
                        value: exp.title.clone(),
                    },
                    DisplayNode::Field {
                        label: "Company",
                        value: exp.company.clone(),
                    },
                    DisplayNode::Field {
                        label: "Years",
                        value: exp.years.clone(),
                    },
                ]
            })
            .collect(),
    ));

    nodes.push(DisplayNode::Heading("Education".to_string()));
    nodes.push(DisplayNode::List(
        cv.education
            .iter()
            .map(|edu| {
                vec![
                    DisplayNode::Field {
                        label: "Degree",
                        value: edu.degree.clone(),
                    },
                    DisplayNode::Field {
                        label: "School",
                        value: edu.school.clone(),
                    },
                    DisplayNode::Field {
                        label: "Year",
                        value: edu.year.clone(),
                    },
                ]
            })
            .collect(),
    ));

    nodes
}

/// The primary view of a render. Exactly one per render; a load-phase error
/// is shown additively, independent of this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryView<'a> {
    /// Enhanced result — the form view is suppressed entirely.
    Enhanced(&'a CvRecord),
    /// Extracted record shown as the submittable form.
    Form(&'a CvRecord),
    /// No record available: neither form nor result.
    Neither,
}

/// Display selection policy: an enhanced record always wins, the extracted
/// record is the fallback, and with neither the page body stays empty. The
/// enhanced record is displayed exactly as the gateway returned it — never
/// merged with the prior extracted record.
pub fn select_view<'a>(
    extracted: Option<&'a CvRecord>,
    enhanced: Option<&'a CvRecord>,
) -> PrimaryView<'a> {
    match (extracted, enhanced) {
        (_, Some(cv)) => PrimaryView::Enhanced(cv),
        (Some(cv), None) => PrimaryView::Form(cv),
        (None, None) => PrimaryView::Neither,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{ContactInfo, EducationEntry, ExperienceEntry};

    fn make_record() -> CvRecord {
        CvRecord {
            name: "Jane Doe".to_string(),
            contact: ContactInfo {
                email: "j@x.com".to_string(),
                linkedin: "https://li/jane".to_string(),
                phone: "555".to_string(),
            },
            skills: vec!["Go".to_string()],
            technologies: vec!["SQL".to_string()],
            experience: vec![ExperienceEntry {
                title: "Eng".to_string(),
                company: "Acme".to_string(),
                years: "2020-2023".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                school: "MIT".to_string(),
                year: "2019".to_string(),
            }],
        }
    }

    /// The list node that follows the given section heading.
    fn section_list<'a>(nodes: &'a [DisplayNode], heading: &str) -> &'a Vec<Vec<DisplayNode>> {
        let at = nodes
            .iter()
            .position(|n| matches!(n, DisplayNode::Heading(h) if h == heading))
            .unwrap_or_else(|| panic!("no heading {heading}"));
        match &nodes[at + 1] {
            DisplayNode::List(items) => items,
            other => panic!("expected list after {heading}, got {other:?}"),
        }
    }

    fn text_items(items: &[Vec<DisplayNode>]) -> Vec<String> {
        items
            .iter()
            .map(|group| match &group[..] {
                [DisplayNode::Text(t)] => t.clone(),
                other => panic!("expected single text node, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_renders_all_required_sections() {
        let nodes = render_cv(&make_record());
        for heading in ["Contact Information", "Skills", "Technologies", "Experience", "Education"] {
            assert!(
                nodes
                    .iter()
                    .any(|n| matches!(n, DisplayNode::Heading(h) if h == heading)),
                "missing section {heading}"
            );
        }
        assert!(matches!(
            &nodes[0],
            DisplayNode::Field { label: "Name", value } if value == "Jane Doe"
        ));
    }

    #[test]
    fn test_linkedin_is_a_link_node_with_untouched_href() {
        let nodes = render_cv(&make_record());
        let link = nodes
            .iter()
            .find(|n| matches!(n, DisplayNode::Link { .. }))
            .expect("no link node");
        match link {
            DisplayNode::Link { label, href, text } => {
                assert_eq!(*label, "LinkedIn");
                assert_eq!(href, "https://li/jane");
                assert_eq!(text, "https://li/jane");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_sequence_order_preserved_including_duplicates() {
        let mut record = make_record();
        record.skills = vec![
            "Zig".to_string(),
            "Ada".to_string(),
            "Zig".to_string(),
            "C".to_string(),
        ];
        let nodes = render_cv(&record);
        assert_eq!(
            text_items(section_list(&nodes, "Skills")),
            vec!["Zig", "Ada", "Zig", "C"]
        );
    }

    #[test]
    fn test_experience_entries_keep_supplied_order() {
        let mut record = make_record();
        record.experience = vec![
            ExperienceEntry {
                title: "Senior".to_string(),
                company: "Zeta".to_string(),
                years: "2022".to_string(),
            },
            ExperienceEntry {
                title: "Junior".to_string(),
                company: "Alpha".to_string(),
                years: "2018".to_string(),
            },
        ];
        let nodes = render_cv(&record);
        let items = section_list(&nodes, "Experience");
        assert_eq!(items.len(), 2);
        assert!(matches!(
            &items[0][1],
            DisplayNode::Field { label: "Company", value } if value == "Zeta"
        ));
        assert!(matches!(
            &items[1][1],
            DisplayNode::Field { label: "Company", value } if value == "Alpha"
        ));
    }

    #[test]
    fn test_empty_sequences_render_as_empty_lists() {
        let record = CvRecord {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let nodes = render_cv(&record);
        assert!(section_list(&nodes, "Skills").is_empty());
        assert!(section_list(&nodes, "Technologies").is_empty());
        assert!(section_list(&nodes, "Experience").is_empty());
        assert!(section_list(&nodes, "Education").is_empty());
    }

    #[test]
    fn test_rendering_does_not_mutate_the_record() {
        let record = make_record();
        let before = record.clone();
        let _ = render_cv(&record);
        assert_eq!(record, before);
    }

    #[test]
    fn test_select_view_enhanced_wins_over_form() {
        let extracted = make_record();
        let mut enhanced = make_record();
        enhanced.name = "Jane A. Doe".to_string();

        let view = select_view(Some(&extracted), Some(&enhanced));
        match view {
            PrimaryView::Enhanced(cv) => assert_eq!(cv, &enhanced),
            other => panic!("expected enhanced view, got {other:?}"),
        }
    }

    #[test]
    fn test_select_view_form_when_only_extracted() {
        let extracted = make_record();
        assert!(matches!(
            select_view(Some(&extracted), None),
            PrimaryView::Form(_)
        ));
    }

    #[test]
    fn test_select_view_neither_without_records() {
        assert_eq!(select_view(None, None), PrimaryView::Neither);
    }

    #[test]
    fn test_select_view_enhanced_even_without_extracted() {
        let enhanced = make_record();
        assert!(matches!(
            select_view(None, Some(&enhanced)),
            PrimaryView::Enhanced(_)
        ));
    }
}
