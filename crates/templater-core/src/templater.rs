//! Whole-document fill and diff

use crate::error::TemplaterError;
use crate::narrative_table::NarrativeTable;
use crate::ssp::Ssp;
use crate::summary_table::SummaryTable;
use crate::table::Table;
use opencontrols::OpenControlData;
use shared_docx::{NodeId, XmlDocument};
use shared_types::DiffReport;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct TemplaterOptions {
    /// Log and skip tables that fail instead of aborting the run
    pub keep_going: bool,
}

/// A table that could not be processed
#[derive(Debug)]
pub struct TableFailure {
    /// Control name, when the heading could still be read
    pub control: Option<String>,
    pub error: TemplaterError,
}

#[derive(Debug, Default)]
pub struct FillOutcome {
    /// Controls whose tables were written, in document order
    pub filled: Vec<String>,
    pub failures: Vec<TableFailure>,
}

#[derive(Debug, Default)]
pub struct DiffOutcome {
    pub reports: Vec<DiffReport>,
    pub failures: Vec<TableFailure>,
}

/// Fill every summary and narrative table in the SSP from the OpenControl data
pub fn templatize_ssp(
    ssp: &mut Ssp,
    data: &OpenControlData,
    options: &TemplaterOptions,
) -> Result<FillOutcome, TemplaterError> {
    let mut outcome = FillOutcome::default();
    let summary_tables = ssp.summary_tables();
    let narrative_tables = ssp.narrative_tables();
    let doc = ssp.document_mut();

    for root in summary_tables {
        let result = SummaryTable::new(doc, root).and_then(|table| {
            table.fill(doc, data)?;
            table.control_name(doc)
        });
        record(doc, root, result, options, &mut outcome.failures, |control| {
            outcome.filled.push(control)
        })?;
    }

    for root in narrative_tables {
        let result = NarrativeTable::new(doc, root).and_then(|table| {
            table.fill(doc, data)?;
            table.control_name(doc)
        });
        record(doc, root, result, options, &mut outcome.failures, |control| {
            outcome.filled.push(control)
        })?;
    }

    info!(
        filled = outcome.filled.len(),
        failed = outcome.failures.len(),
        "Filled SSP"
    );
    Ok(outcome)
}

/// Report every discrepancy between the SSP's summary tables and the data.
/// The document is not modified.
pub fn diff_ssp(
    ssp: &Ssp,
    data: &OpenControlData,
    options: &TemplaterOptions,
) -> Result<DiffOutcome, TemplaterError> {
    let mut outcome = DiffOutcome::default();
    let doc = ssp.document();

    for root in ssp.summary_tables() {
        let result = SummaryTable::new(doc, root).and_then(|table| table.diff(doc, data));
        record(doc, root, result, options, &mut outcome.failures, |reports| {
            outcome.reports.extend(reports)
        })?;
    }

    info!(
        reports = outcome.reports.len(),
        failed = outcome.failures.len(),
        "Compared SSP with OpenControl data"
    );
    Ok(outcome)
}

/// Hand a table's result to `on_success`, or either abort or record the
/// failure depending on `keep_going`
fn record<T>(
    doc: &XmlDocument,
    root: NodeId,
    result: Result<T, TemplaterError>,
    options: &TemplaterOptions,
    failures: &mut Vec<TableFailure>,
    on_success: impl FnOnce(T),
) -> Result<(), TemplaterError> {
    match result {
        Ok(value) => {
            on_success(value);
            Ok(())
        }
        Err(error) if options.keep_going => {
            let control = Table::new(root).control_name(doc).ok();
            warn!(control = ?control, error = %error, "Skipping table");
            failures.push(TableFailure { control, error });
            Ok(())
        }
        Err(error) => Err(error),
    }
}
