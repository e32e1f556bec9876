//! HTML rendering for the dashboard page.
//!
//! Walks the display tree from [`render_cv`] into markup. Every text and
//! attribute value passes through [`escape_html`]; the linkedin href is
//! untrusted input and gets `target="_blank"` with [`SAFE_LINK_REL`]. The
//! extracted record travels back on submit inside a hidden form field, so
//! the form embeds its exact JSON serialization.

use crate::dashboard::view::{render_cv, select_view, DisplayNode, PrimaryView, SAFE_LINK_REL};
use crate::models::cv::CvRecord;

/// Form field carrying the serialized CV record on submit.
pub const CV_FIELD: &str = "extractedCV";

pub const SUBMITTING_NOTICE: &str = "Enhancing your CV, please wait...";

/// Everything one render of the page can show. Exactly one primary view is
/// chosen from `extracted`/`enhanced`; the error and notice slots render
/// additively alongside it.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub extracted: Option<&'a CvRecord>,
    pub enhanced: Option<&'a CvRecord>,
    /// Load-phase failure, shown inline without blocking the page.
    pub load_error: Option<&'a str>,
    /// Submission-phase failure, same inline treatment as a load error.
    pub submit_failure: Option<&'a str>,
    /// Benign notice ("No CV data received").
    pub notice: Option<&'a str>,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn walk_nodes(nodes: &[DisplayNode], out: &mut String) {
    for node in nodes {
        match node {
            DisplayNode::Heading(text) => {
                out.push_str(&format!("<h2>{}</h2>\n", escape_html(text)));
            }
            DisplayNode::Field { label, value } => {
                out.push_str(&format!(
                    "<p><strong>{label}:</strong> {}</p>\n",
                    escape_html(value)
                ));
            }
            DisplayNode::Link { label, href, text } => {
                out.push_str(&format!(
                    "<p><strong>{label}:</strong> <a href=\"{}\" target=\"_blank\" rel=\"{SAFE_LINK_REL}\">{}</a></p>\n",
                    escape_html(href),
                    escape_html(text)
                ));
            }
            DisplayNode::Text(text) => {
                out.push_str(&escape_html(text));
            }
            DisplayNode::List(items) => {
                out.push_str("<ul>\n");
                for group in items {
                    out.push_str("<li>");
                    walk_nodes(group, out);
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }
        }
    }
}

fn cv_body(cv: &CvRecord) -> String {
    let mut out = String::new();
    walk_nodes(&render_cv(cv), &mut out);
    out
}

/// The extracted view as a submittable form. The hidden field holds the
/// record's JSON so the POST carries back exactly what was displayed. The
/// inline script is the optimistic `Idle -> Submitting` transition: it fires
/// when the user submits, before any network I/O, disabling the control and
/// showing the in-progress notice.
fn form_view(cv: &CvRecord) -> String {
    format!(
        concat!(
            "<form method=\"post\" action=\"/dashboard\" id=\"enhance-form\">\n",
            "{body}",
            "<input type=\"hidden\" name=\"{field}\" value=\"{payload}\">\n",
            "<button type=\"submit\" id=\"enhance-btn\">Enhance CV</button>\n",
            "<p id=\"enhance-pending\" hidden>{notice}</p>\n",
            "</form>\n",
            "<script>\n",
            "document.getElementById('enhance-form').addEventListener('submit', function () {{\n",
            "  var btn = document.getElementById('enhance-btn');\n",
            "  btn.disabled = true;\n",
            "  btn.setAttribute('aria-busy', 'true');\n",
            "  document.getElementById('enhance-pending').hidden = false;\n",
            "}});\n",
            "</script>\n",
        ),
        body = cv_body(cv),
        field = CV_FIELD,
        payload = escape_html(&cv.to_form_json()),
        notice = SUBMITTING_NOTICE,
    )
}

/// Renders the full page. One primary view per render; a load error and a
/// submission failure render additively, in the same inline red treatment.
pub fn render_page(view: &PageView) -> String {
    let mut body = String::from("<h1>Your CV</h1>\n");

    if let Some(message) = view.load_error {
        body.push_str(&format!(
            "<p class=\"error\" style=\"color: red\">{}</p>\n",
            escape_html(message)
        ));
    }
    if let Some(message) = view.submit_failure {
        body.push_str(&format!(
            "<p class=\"error\" style=\"color: red\">{}</p>\n",
            escape_html(message)
        ));
    }
    if let Some(message) = view.notice {
        body.push_str(&format!("<p class=\"notice\">{}</p>\n", escape_html(message)));
    }

    match select_view(view.extracted, view.enhanced) {
        PrimaryView::Enhanced(cv) => {
            body.push_str("<section id=\"enhanced-cv\">\n<h2>Enhanced CV</h2>\n");
            body.push_str(&cv_body(cv));
            body.push_str("</section>\n");
        }
        PrimaryView::Form(cv) => {
            body.push_str("<section id=\"extracted-cv\">\n");
            body.push_str(&form_view(cv));
            body.push_str("</section>\n");
        }
        PrimaryView::Neither => {}
    }

    format!(
        concat!(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n",
            "<meta charset=\"utf-8\">\n<title>Burnish</title>\n",
            "</head>\n<body>\n{}</body>\n</html>\n"
        ),
        body
    )
}
