//! Radio 4G sheet rules.

use cdd_model::{RowView, SheetView, SpuVersion};

use crate::checks::CheckContext;
use crate::checks::{columns, cross_sheet, fields};
use crate::issue::Issue;
use crate::outcome::FindingLog;
use crate::patterns::float_key;
use crate::schema::RADIO_4G_SCHEMA;

const PCI_MAX: i64 = 503;

pub(crate) fn check(sheet: &SheetView<'_>, ctx: &CheckContext<'_>, log: &mut FindingLog) {
    columns::check(sheet, &RADIO_4G_SCHEMA, log);

    for row in sheet.rows() {
        let mut issues = Vec::new();
        issues.extend(cross_sheet::check_element(&row, ctx.ip_names.as_ref()));
        issues.extend(fields::ranged_integer(&row, "PCI", 0, PCI_MAX));
        issues.extend(check_earfcn(&row, ctx.spu));
        issues.extend(check_rru_type(&row, ctx.spu));
        issues.extend(check_bandwidth(&row, ctx.spu));

        for issue in issues {
            log.push(issue.at_row(&row));
        }
    }
}

/// Downlink EARFCN must have a band indicator entry.
fn check_earfcn(row: &RowView<'_>, spu: &SpuVersion) -> Option<Issue> {
    match fields::integer_cell(row, "arfcndl") {
        Ok(Some(earfcn)) => {
            let key = earfcn.to_string();
            (!spu.band_indicators.contains_key(&key)).then_some(Issue::UnknownEarfcn { value: key })
        }
        Ok(None) => None,
        Err(issue) => Some(issue),
    }
}

fn check_rru_type(row: &RowView<'_>, spu: &SpuVersion) -> Option<Issue> {
    let value = row.cell("RRUname").as_text()?;
    (!spu.hardware_types.contains_key(&value)).then_some(Issue::UnknownRruType { value })
}

/// Bandwidth keys are decimal strings such as `20.0` or `1.4`.
fn check_bandwidth(row: &RowView<'_>, spu: &SpuVersion) -> Option<Issue> {
    match fields::float_cell(row, "dlChannelBandwidth") {
        Ok(Some(bandwidth)) => {
            let key = float_key(bandwidth);
            (!spu.bandwidths.contains_key(&key)).then_some(Issue::UnknownBandwidth { value: key })
        }
        Ok(None) => None,
        Err(issue) => Some(issue),
    }
}
