use std::sync::LazyLock;

use crate::error::NoteError;
use regex::Regex;
use tracing::debug;

const TABSIZE: usize = 4;

/// The section headers of a SOAP note, in their canonical spelling
pub const SOAP_HEADERS: [&str; 4] = ["Subjective", "Objective", "Assessment", "Plan"];

static SOAP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| header_pattern(&SOAP_HEADERS).expect("valid SOAP header regex"));

/// A labelled block of a note. The header is one of the splitter's recognised
/// labels (in its configured spelling), or absent for text that appeared
/// before the first header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Section {
    header: Option<String>,
    body: String,
}

impl Section {
    pub fn new<S: Into<String>>(header: Option<S>, body: S) -> Section {
        Section {
            header: header.map(Into::into),
            body: body.into(),
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The section text with the header removed; may span several lines
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// What to do with text that comes before the first recognised header
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum LeadingText {
    /// Keep it as a header-less first section (unless it is blank)
    #[default]
    Keep,
    /// Drop it
    Discard,
}

/// Splits a note into [Section]s on a fixed set of header labels.
///
/// A header is recognised at the start of a line, case-insensitively, and may
/// be decorated the way generated notes tend to be: indentation, markdown
/// `#`/`**` markers, and space before the colon (`## Plan`, `**Plan:**`,
/// `plan :`). The colon may only be left out when the label is alone on its
/// line, so prose that merely starts with a label word stays body text.
///
/// ```
/// use note_pdf::layout::SectionSplitter;
///
/// let sections = SectionSplitter::default().split("Subjective: cough\nPlan: rest");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[1].header(), Some("Plan"));
/// assert_eq!(sections[1].body(), "rest");
/// ```
#[derive(Clone, Debug)]
pub struct SectionSplitter {
    labels: Vec<String>,
    pattern: Regex,
    leading: LeadingText,
}

impl Default for SectionSplitter {
    /// SOAP headers, keeping any leading text
    fn default() -> Self {
        SectionSplitter {
            labels: SOAP_HEADERS.iter().map(|s| s.to_string()).collect(),
            pattern: SOAP_PATTERN.clone(),
            leading: LeadingText::Keep,
        }
    }
}

impl SectionSplitter {
    /// Build a splitter for the given header labels. Labels are matched
    /// case-insensitively and any whitespace inside a label matches any run of
    /// spaces or tabs.
    pub fn new<I, S>(labels: I, leading: LeadingText) -> Result<SectionSplitter, NoteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|label| label.into().trim().to_string())
            .collect();
        if labels.is_empty() {
            return Err(NoteError::InvalidHeaderLabels(
                "at least one label is required".into(),
            ));
        }
        if labels.iter().any(|label| label.is_empty()) {
            return Err(NoteError::InvalidHeaderLabels(
                "labels must not be blank".into(),
            ));
        }

        let pattern = header_pattern(&labels)?;
        Ok(SectionSplitter {
            labels,
            pattern,
            leading,
        })
    }

    /// Change the leading text policy
    pub fn with_leading(mut self, leading: LeadingText) -> SectionSplitter {
        self.leading = leading;
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Partition `note` into sections in source order. Sections with an empty
    /// body are kept; blank leading text never becomes a section.
    pub fn split(&self, note: &str) -> Vec<Section> {
        let note = normalize_text(note);

        let mut sections: Vec<Section> = Vec::new();
        let mut header: Option<String> = None;
        let mut body_start = 0;

        for caps in self.pattern.captures_iter(&note) {
            let (Some(whole), Some(label)) = (caps.get(0), caps.name("label")) else {
                continue;
            };

            self.close_section(&mut sections, header.take(), &note[body_start..whole.start()]);
            header = Some(self.canonical_label(label.as_str()));
            body_start = whole.end();
        }
        self.close_section(&mut sections, header, &note[body_start..]);

        debug!(
            sections = sections.len(),
            titled = sections.iter().filter(|s| s.header.is_some()).count(),
            "split note into sections"
        );
        sections
    }

    fn close_section(&self, sections: &mut Vec<Section>, header: Option<String>, body: &str) {
        let body = body.trim();
        match header {
            Some(header) => sections.push(Section::new(Some(header), body.to_string())),
            None if !body.is_empty() && self.leading == LeadingText::Keep => {
                sections.push(Section::new(None, body.to_string()))
            }
            None => {}
        }
    }

    /// Map matched header text back to the configured spelling
    fn canonical_label(&self, matched: &str) -> String {
        let matched = collapse_whitespace(matched).to_lowercase();
        self.labels
            .iter()
            .find(|label| collapse_whitespace(label).to_lowercase() == matched)
            .cloned()
            .unwrap_or(matched)
    }
}

/// Normalize newlines to `\n` and expand tabs
pub(crate) fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(TABSIZE))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn header_pattern<S: AsRef<str>>(labels: &[S]) -> Result<Regex, regex::Error> {
    let mut labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    // longest first so a label that prefixes another can't shadow it
    labels.sort_by_key(|label| std::cmp::Reverse(label.chars().count()));

    let alternation = labels
        .iter()
        .map(|label| {
            label
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[ \t]+")
        })
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(
        r"(?im)^[ \t]*[#*]*[ \t]*(?P<label>{alternation})[ \t]*\**[ \t]*(?::\**|$)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(sections: &[Section]) -> Vec<Option<&str>> {
        sections.iter().map(Section::header).collect()
    }

    #[test]
    fn splits_a_soap_note_in_order() {
        let note = "Subjective: Patient reports cough.\nObjective: Temp 38C.\nAssessment: Likely viral.\nPlan: Rest and fluids.";
        let sections = SectionSplitter::default().split(note);

        assert_eq!(
            headers(&sections),
            vec![
                Some("Subjective"),
                Some("Objective"),
                Some("Assessment"),
                Some("Plan")
            ]
        );
        let bodies: Vec<&str> = sections.iter().map(Section::body).collect();
        assert_eq!(
            bodies,
            vec![
                "Patient reports cough.",
                "Temp 38C.",
                "Likely viral.",
                "Rest and fluids."
            ]
        );
    }

    #[test]
    fn matches_headers_case_insensitively_with_decoration() {
        let note = "## SUBJECTIVE\nsore throat\n**objective:** afebrile\n  Assessment :\nviral pharyngitis\nplan:";
        let sections = SectionSplitter::default().split(note);

        assert_eq!(
            headers(&sections),
            vec![
                Some("Subjective"),
                Some("Objective"),
                Some("Assessment"),
                Some("Plan")
            ]
        );
        assert_eq!(sections[0].body(), "sore throat");
        assert_eq!(sections[1].body(), "afebrile");
        assert_eq!(sections[2].body(), "viral pharyngitis");
        assert_eq!(sections[3].body(), "");
    }

    #[test]
    fn keeps_multiline_bodies_together() {
        let note = "Plan:\n- rest\n- fluids\n\nreturn if worse";
        let sections = SectionSplitter::default().split(note);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body(), "- rest\n- fluids\n\nreturn if worse");
    }

    #[test]
    fn prose_starting_with_a_label_word_is_body_text() {
        let note = "Plan: rest\nPlan of care was discussed.\nObjectively fine.";
        let sections = SectionSplitter::default().split(note);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].body(),
            "rest\nPlan of care was discussed.\nObjectively fine."
        );
    }

    #[test]
    fn unrecognised_headers_stay_in_the_preceding_section() {
        let note = "Objective: BP 120/80\nHistory: asthma";
        let sections = SectionSplitter::default().split(note);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body(), "BP 120/80\nHistory: asthma");
    }

    #[test]
    fn leading_text_is_kept_by_default() {
        let note = "Here is your summary.\nSubjective: cough";
        let sections = SectionSplitter::default().split(note);
        assert_eq!(headers(&sections), vec![None, Some("Subjective")]);
        assert_eq!(sections[0].body(), "Here is your summary.");
    }

    #[test]
    fn leading_text_can_be_discarded() {
        let note = "Here is your summary.\nSubjective: cough";
        let sections = SectionSplitter::default()
            .with_leading(LeadingText::Discard)
            .split(note);
        assert_eq!(headers(&sections), vec![Some("Subjective")]);
    }

    #[test]
    fn blank_leading_text_is_never_a_section() {
        let sections = SectionSplitter::default().split("\n   \nPlan: rest");
        assert_eq!(headers(&sections), vec![Some("Plan")]);
    }

    #[test]
    fn text_without_headers_is_one_untitled_section() {
        let sections = SectionSplitter::default().split("Drink water.");
        assert_eq!(sections, vec![Section::new(None, "Drink water.")]);
    }

    #[test]
    fn empty_note_has_no_sections() {
        assert!(SectionSplitter::default().split("").is_empty());
        assert!(SectionSplitter::default().split(" \r\n\t").is_empty());
    }

    #[test]
    fn empty_sections_are_not_dropped() {
        let sections = SectionSplitter::default().split("Subjective:\nObjective:\nPlan: rest");
        assert_eq!(
            headers(&sections),
            vec![Some("Subjective"), Some("Objective"), Some("Plan")]
        );
        assert_eq!(sections[0].body(), "");
        assert_eq!(sections[1].body(), "");
    }

    #[test]
    fn longest_label_wins_when_labels_share_a_prefix() {
        let splitter =
            SectionSplitter::new(["Plan", "Plan of Care"], LeadingText::Keep).unwrap();
        let sections = splitter.split("Plan of  care: follow up\nPlan: rest");
        assert_eq!(headers(&sections), vec![Some("Plan of Care"), Some("Plan")]);
        assert_eq!(sections[0].body(), "follow up");
    }

    #[test]
    fn labels_with_regex_metacharacters_are_escaped() {
        let splitter = SectionSplitter::new(["Vitals (today)"], LeadingText::Keep).unwrap();
        let sections = splitter.split("vitals (TODAY): 37C");
        assert_eq!(headers(&sections), vec![Some("Vitals (today)")]);
        assert_eq!(sections[0].body(), "37C");
    }

    #[test]
    fn carriage_returns_and_tabs_are_normalized() {
        let sections = SectionSplitter::default().split("Subjective:\r\n\tcough\rObjective: ok");
        assert_eq!(sections[0].body(), "cough");
        assert_eq!(sections[1].body(), "ok");
    }

    #[test]
    fn rejects_empty_or_blank_labels() {
        assert!(matches!(
            SectionSplitter::new(Vec::<String>::new(), LeadingText::Keep),
            Err(NoteError::InvalidHeaderLabels(_))
        ));
        assert!(matches!(
            SectionSplitter::new(["Plan", "  "], LeadingText::Keep),
            Err(NoteError::InvalidHeaderLabels(_))
        ));
    }
}
