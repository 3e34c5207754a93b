//! Control Summary Information tables
//!
//! ```text
//! | AC-2 (1) | Control Summary Information       |
//! | Responsible Role: ...                        |
//! | Parameter AC-2(1)(a): ...                    |
//! | Implementation Status (check all that apply) |
//! | Control Origination (check all that apply)   |
//! ```

use crate::diff::{diff_status_sets, diff_text_field};
use crate::error::TemplaterError;
use crate::parameter::Parameter;
use crate::responsible_role::{ResponsibleRole, RESPONSIBLE_ROLE_FIELD};
use crate::status_table::{ControlOrigination, ImplementationStatus};
use crate::table::Table;
use opencontrols::OpenControlData;
use shared_docx::{NodeId, XmlDocument};
use shared_types::DiffReport;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SummaryTable {
    table: Table,
    responsible_role: ResponsibleRole,
    parameters: Vec<Parameter>,
    control_origination: ControlOrigination,
    implementation_status: ImplementationStatus,
}

impl SummaryTable {
    /// Locate every field of the table up front so a malformed table fails
    /// before anything is written
    pub fn new(doc: &XmlDocument, root: NodeId) -> Result<Self, TemplaterError> {
        Ok(Self {
            table: Table::new(root),
            responsible_role: ResponsibleRole::find(doc, root)?,
            parameters: Parameter::find_all(doc, root)?,
            control_origination: ControlOrigination::find(doc, root)?,
            implementation_status: ImplementationStatus::find(doc, root)?,
        })
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn control_name(&self, doc: &XmlDocument) -> Result<String, TemplaterError> {
        self.table.control_name(doc)
    }

    pub fn responsible_role(&self) -> &ResponsibleRole {
        &self.responsible_role
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn control_origination(&self) -> &ControlOrigination {
        &self.control_origination
    }

    pub fn implementation_status(&self) -> &ImplementationStatus {
        &self.implementation_status
    }

    /// Write the OpenControl values for this control into the table
    pub fn fill(
        &self,
        doc: &mut XmlDocument,
        data: &OpenControlData,
    ) -> Result<(), TemplaterError> {
        let control = self.control_name(doc)?;
        self.fill_responsible_role(doc, data, &control);
        self.fill_parameters(doc, data, &control)?;
        self.fill_control_origination(doc, data, &control);
        self.fill_implementation_status(doc, data, &control);
        info!(control = %control, "Filled summary table");
        Ok(())
    }

    fn fill_responsible_role(&self, doc: &mut XmlDocument, data: &OpenControlData, control: &str) {
        let roles = data.get_responsible_roles(control);
        debug!(control, roles = %roles, "Filling responsible role");
        self.responsible_role.set_value(doc, &roles);
    }

    fn fill_parameters(
        &self,
        doc: &mut XmlDocument,
        data: &OpenControlData,
        control: &str,
    ) -> Result<(), TemplaterError> {
        for parameter in &self.parameters {
            let id = parameter.id(doc)?;
            let value = data.get_parameter(control, &id);
            debug!(control, parameter = %id, "Filling parameter");
            parameter.set_value(doc, &value)?;
        }
        Ok(())
    }

    fn fill_control_origination(
        &self,
        doc: &mut XmlDocument,
        data: &OpenControlData,
        control: &str,
    ) {
        let origins = data.get_control_origins(control);
        self.control_origination
            .set_checked(doc, control, origins.checked_origins());
    }

    fn fill_implementation_status(
        &self,
        doc: &mut XmlDocument,
        data: &OpenControlData,
        control: &str,
    ) {
        let statuses = data.get_implementation_statuses(control);
        self.implementation_status
            .set_checked(doc, control, statuses.checked_implementation_statuses());
    }

    /// Compare the table with the OpenControl data without modifying it
    pub fn diff(
        &self,
        doc: &XmlDocument,
        data: &OpenControlData,
    ) -> Result<Vec<DiffReport>, TemplaterError> {
        let control = self.control_name(doc)?;
        let mut reports = Vec::new();
        reports.extend(self.diff_responsible_role(doc, data, &control));
        reports.extend(self.diff_control_origination(doc, data, &control));
        info!(control = %control, reports = reports.len(), "Compared summary table");
        Ok(reports)
    }

    fn diff_responsible_role(
        &self,
        doc: &XmlDocument,
        data: &OpenControlData,
        control: &str,
    ) -> Option<DiffReport> {
        diff_text_field(
            control,
            RESPONSIBLE_ROLE_FIELD,
            &self.responsible_role.value(doc),
            &data.get_responsible_roles(control),
            ResponsibleRole::is_default_value,
        )
    }

    fn diff_control_origination(
        &self,
        doc: &XmlDocument,
        data: &OpenControlData,
        control: &str,
    ) -> Vec<DiffReport> {
        let in_document = self.control_origination.checked(doc);
        let in_yaml = data.get_control_origins(control);
        diff_status_sets(control, &in_document, in_yaml.checked_origins())
    }
}
