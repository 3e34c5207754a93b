//! Building discrepancy reports

use shared_types::{DiffReport, ReportField, Source, StatusKey};
use std::collections::BTreeSet;

/// Compare a free-text field. No report when the document side is still a
/// template default or both sides agree.
pub fn diff_text_field(
    control: &str,
    field: &str,
    ssp_text: &str,
    yaml_text: &str,
    is_default: impl Fn(&str) -> bool,
) -> Option<DiffReport> {
    if is_default(ssp_text) || ssp_text == yaml_text {
        return None;
    }
    Some(DiffReport::new(
        control,
        field,
        ReportField::new(Source::Ssp, ssp_text),
        ReportField::new(Source::Yaml, yaml_text),
    ))
}

/// One report per key present on only one side: document-only keys first,
/// then YAML-only keys, each in vocabulary order.
pub fn diff_status_sets<K: StatusKey>(
    control: &str,
    ssp: &BTreeSet<K>,
    yaml: &BTreeSet<K>,
) -> Vec<DiffReport> {
    let mut reports: Vec<DiffReport> = ssp
        .difference(yaml)
        .map(|key| one_sided_report(control, *key, Source::Ssp))
        .collect();
    reports.extend(
        yaml.difference(ssp)
            .map(|key| one_sided_report(control, *key, Source::Yaml)),
    );
    reports
}

fn one_sided_report<K: StatusKey>(control: &str, key: K, present_in: Source) -> DiffReport {
    DiffReport::new(
        control,
        K::FIELD,
        ReportField::new(present_in, key.text(present_in)),
        ReportField::new(present_in.other(), ""),
    )
}
