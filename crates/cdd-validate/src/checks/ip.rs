//! IP sheet rules.

use cdd_model::{CoreRegistry, ReferenceConfig, RowView, SheetView};

use crate::checks::CheckContext;
use crate::checks::{columns, fields};
use crate::issue::Issue;
use crate::outcome::FindingLog;
use crate::patterns::{is_valid_ipv4, is_valid_ne_name};
use crate::schema::IP_SCHEMA;

/// Address columns, checked in this order.
const ADDRESS_COLUMNS: &[&str] = &[
    "OAM_IP",
    "LTE_IP",
    "NR_IP",
    "OAM_Gateway",
    "LTE_Gateway",
    "NR_Gateway",
];

const ID_COLUMNS: &[&str] = &["eNBId", "gNBId"];

pub(crate) fn check(sheet: &SheetView<'_>, ctx: &CheckContext<'_>, log: &mut FindingLog) {
    columns::check(sheet, &IP_SCHEMA, log);

    for row in sheet.rows() {
        for issue in row_issues(&row, ctx.config) {
            log.push(issue.at_row(&row));
        }
    }
}

fn row_issues(row: &RowView<'_>, config: &ReferenceConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(value) = row.cell("NE_Name").as_text()
        && !is_valid_ne_name(&value)
    {
        issues.push(Issue::NeNameFormat { value });
    }

    for &column in ADDRESS_COLUMNS {
        if let Some(value) = row.cell(column).as_text()
            && !is_valid_ipv4(&value)
        {
            issues.push(Issue::InvalidAddress { column, value });
        }
    }

    for &column in ID_COLUMNS {
        issues.extend(fields::numeric_id(row, column));
    }

    for registry in [CoreRegistry::Mme, CoreRegistry::Amf] {
        let Some(names) = row.cell(registry.label()).as_text() else {
            continue;
        };
        for name in names.split_whitespace() {
            if !config.is_registered(registry, name) {
                issues.push(Issue::UnregisteredCoreNode {
                    registry,
                    name: name.to_string(),
                });
            }
        }
    }

    issues
}
