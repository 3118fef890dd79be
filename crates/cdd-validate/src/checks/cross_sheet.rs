//! Radio sheet to IP sheet references.

use std::collections::BTreeSet;

use cdd_model::{RowView, SheetName, TableSet};

use crate::issue::Issue;

/// Element names declared on the IP sheet.
///
/// `None` when the IP sheet is absent, empty or has no NE_Name column; those
/// cases are reported by the presence and column rules instead.
pub(crate) fn ip_element_names(tables: &TableSet) -> Option<BTreeSet<String>> {
    let ip = tables.sheet_with_rows(SheetName::Ip)?;
    if !ip.has_column("NE_Name") {
        return None;
    }
    Some(ip.distinct_text("NE_Name"))
}

pub(crate) fn check_element(row: &RowView<'_>, names: Option<&BTreeSet<String>>) -> Option<Issue> {
    let names = names?;
    let value = row.cell("NE_Name").as_text()?;
    if names.contains(&value) {
        None
    } else {
        Some(Issue::UnknownElement { value })
    }
}
