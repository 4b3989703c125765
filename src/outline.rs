use pdf_writer::{Finish, Name, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// The document outline: a flat list of bookmarks, one per note section
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// 0-based position of the target page in the document's page order
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark<S: ToString>(&mut self, page_index: usize, title: S) {
        self.entries.push(OutlineEntry {
            page_index,
            title: title.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the outline root and its items. Page refs must already be
    /// allocated; entries pointing at pages that don't exist are skipped.
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let entries: Vec<(usize, &OutlineEntry)> = self
            .entries
            .iter()
            .filter(|entry| refs.get(RefType::Page(entry.page_index)).is_some())
            .enumerate()
            .collect();

        let outlines_id = refs.gen(RefType::Outlines);
        for (i, _) in entries.iter() {
            refs.gen(RefType::OutlineEntry(*i));
        }

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (
            refs.get(RefType::OutlineEntry(0)),
            entries
                .len()
                .checked_sub(1)
                .and_then(|i| refs.get(RefType::OutlineEntry(i))),
        ) {
            outline.first(first);
            outline.last(last);
        }
        outline.finish();

        for (i, entry) in entries.iter() {
            let (Some(id), Some(page)) = (
                refs.get(RefType::OutlineEntry(*i)),
                refs.get(RefType::Page(entry.page_index)),
            ) else {
                continue;
            };

            let mut item = writer.outline_item(id);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if let Some(prev) = i.checked_sub(1).and_then(|p| refs.get(RefType::OutlineEntry(p))) {
                item.prev(prev);
            }
            if let Some(next) = refs.get(RefType::OutlineEntry(i + 1)) {
                item.next(next);
            }

            let mut dest = item.insert(Name(b"Dest")).array();
            dest.item(page);
            dest.item(Name(b"Fit"));
            dest.finish();
        }
    }
}
