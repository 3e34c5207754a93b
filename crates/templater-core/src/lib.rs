//! FedRAMP SSP templating from OpenControl data
//!
//! Reads the Control Summary Information and narrative tables of a FedRAMP
//! System Security Plan, then either fills them from an OpenControl
//! workspace ([`templatize_ssp`]) or reports where the two disagree
//! ([`diff_ssp`]).
//!
//! ```no_run
//! use opencontrols::OpenControlData;
//! use templater_core::{diff_ssp, Ssp, TemplaterOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = OpenControlData::load_from("opencontrols")?;
//! let ssp = Ssp::load("FedRAMP-System-Security-Plan-Template-v2.1.docx")?;
//! for report in diff_ssp(&ssp, &data, &TemplaterOptions::default())?.reports {
//!     print!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod error;
pub mod locator;
pub mod narrative_table;
pub mod parameter;
pub mod responsible_role;
pub mod ssp;
pub mod status_table;
pub mod summary_table;
pub mod table;
pub mod templater;

pub use error::TemplaterError;
pub use narrative_table::NarrativeTable;
pub use parameter::Parameter;
pub use responsible_role::ResponsibleRole;
pub use ssp::Ssp;
pub use status_table::{ControlOrigination, ImplementationStatus, StatusTable};
pub use summary_table::SummaryTable;
pub use table::Table;
pub use templater::{
    diff_ssp, templatize_ssp, DiffOutcome, FillOutcome, TableFailure, TemplaterOptions,
};
