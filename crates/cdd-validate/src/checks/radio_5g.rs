//! Radio 5G sheet rules.

use cdd_model::SheetView;

use crate::checks::CheckContext;
use crate::checks::{columns, cross_sheet, fields};
use crate::outcome::FindingLog;
use crate::schema::RADIO_5G_SCHEMA;

const NR_PCI_MAX: i64 = 1007;

pub(crate) fn check(sheet: &SheetView<'_>, ctx: &CheckContext<'_>, log: &mut FindingLog) {
    columns::check(sheet, &RADIO_5G_SCHEMA, log);

    for row in sheet.rows() {
        let mut issues = Vec::new();
        issues.extend(cross_sheet::check_element(&row, ctx.ip_names.as_ref()));
        issues.extend(fields::numeric_id(&row, "gNBId"));
        issues.extend(fields::ranged_integer(&row, "nRPCI", 0, NR_PCI_MAX));

        for issue in issues {
            log.push(issue.at_row(&row));
        }
    }
}
