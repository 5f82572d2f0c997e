//! Delivery note submission: validate, remember lookups, render, log

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use delivery_domain::model::{DeliveryRecord, Document, FieldSet, FormLayout, LogEntry};
use delivery_domain::repository::{LookupRepository, RecordLogRepository};
use delivery_domain::service::{load_lookups, remember, RecordFormatter};
use delivery_types::{Error, FieldName, Result};
use tracing::{info, warn};

/// Outcome of a successful submission
///
/// Lookup persistence and logging are independent of rendering; their
/// failures are reported here instead of failing the submission.
#[derive(Debug)]
pub struct Submission {
    pub record: DeliveryRecord,
    pub document: Document,
    /// Fields whose value was new to the lookup store
    pub new_lookups: Vec<FieldName>,
    pub lookup_error: Option<Error>,
    pub log_error: Option<Error>,
}

impl Submission {
    pub fn is_clean(&self) -> bool {
        self.lookup_error.is_none() && self.log_error.is_none()
    }
}

/// Delivery note use cases over a lookup store and an optional history log
pub struct DeliveryService<L, H> {
    lookups: L,
    log: Option<H>,
    formatter: RecordFormatter,
}

impl<L, H> DeliveryService<L, H>
where
    L: LookupRepository,
    H: RecordLogRepository,
{
    pub fn new(lookups: L, log: Option<H>, formatter: RecordFormatter) -> Self {
        Self {
            lookups,
            log,
            formatter,
        }
    }

    pub fn layout(&self) -> &FormLayout {
        self.formatter.layout()
    }

    /// Submit a completed form stamped with the current local time
    pub fn submit(&self, fields: FieldSet) -> Result<Submission> {
        self.submit_at(fields, Local::now().naive_local())
    }

    /// Submit a completed form.
    ///
    /// Fails only when a required field is empty. Lookup and log storage
    /// errors are returned inside the [`Submission`].
    pub fn submit_at(&self, fields: FieldSet, created_at: NaiveDateTime) -> Result<Submission> {
        let record = DeliveryRecord::finalize(fields, self.layout(), created_at)?;

        let (new_lookups, lookup_error) =
            match remember(&self.lookups, self.layout(), record.fields()) {
                Ok(inserted) => (inserted, None),
                Err(e) => {
                    warn!(error = %e, "failed to store lookup values");
                    (Vec::new(), Some(e))
                }
            };

        let document = self.formatter.render_record(&record)?;

        let log_error = match self.log {
            Some(ref log) => log.append(&record).err(),
            None => None,
        };
        if let Some(ref e) = log_error {
            warn!(error = %e, "failed to append delivery to history log");
        }

        info!(
            customer = record.fields().get(FieldName::Customer),
            new_lookups = new_lookups.len(),
            "delivery note created"
        );

        Ok(Submission {
            record,
            document,
            new_lookups,
            lookup_error,
            log_error,
        })
    }

    /// Sorted lookup values for every lookup-backed field of the layout
    pub fn lookups(&self) -> Result<BTreeMap<FieldName, Vec<String>>> {
        load_lookups(&self.lookups, self.layout())
    }

    /// Sorted lookup values of one field
    pub fn lookup_values(&self, field: FieldName) -> Result<Vec<String>> {
        Ok(self.lookups.load_list(field)?.sorted())
    }

    /// Store one lookup value; returns whether it was new
    pub fn add_lookup(&self, field: FieldName, value: &str) -> Result<bool> {
        self.lookups.upsert_if_new(field, value)
    }

    /// History log entries; empty when logging is disabled
    pub fn history(&self) -> Result<Vec<LogEntry>> {
        match self.log {
            Some(ref log) => log.read_all(),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use delivery_domain::model::SupplierHeader;
    use delivery_infra::persistence::{FileLookupStore, FileRecordLog};
    use std::fs;
    use tempfile::tempdir;

    fn acme() -> FieldSet {
        FieldSet::new()
            .with(FieldName::Customer, "Acme Farms")
            .with(FieldName::Address, "12 Mutare Road, Marondera")
            .with(FieldName::Transporter, "Zim Haulage")
            .with(FieldName::Driver, "Tendai Moyo")
            .with(FieldName::DriverId, "63-123456-A-42")
            .with(FieldName::TruckReg, "AEZ 1234")
            .with(FieldName::TrailerReg, "ACF 9876")
            .with(FieldName::Product, "Maize")
            .with(FieldName::Quantity, "10")
            .with(FieldName::Type, "Ton")
            .with(FieldName::Destination, "Harare Depot")
            .with(FieldName::Description, "Grade A white maize")
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 3)
            .unwrap()
            .and_hms_opt(11, 45, 0)
            .unwrap()
    }

    fn service(
        lookups: FileLookupStore,
        log: Option<FileRecordLog>,
    ) -> DeliveryService<FileLookupStore, FileRecordLog> {
        let formatter = RecordFormatter::new(SupplierHeader::default(), FormLayout::default());
        DeliveryService::new(lookups, log, formatter)
    }

    #[test]
    fn test_submit_stores_lookups_and_logs() {
        let dir = tempdir().unwrap();
        let service = service(
            FileLookupStore::in_dir(dir.path()),
            Some(FileRecordLog::in_dir(dir.path())),
        );

        let submission = service.submit_at(acme(), at()).unwrap();
        assert!(submission.is_clean());
        assert_eq!(submission.new_lookups, FieldName::LOOKUP.to_vec());
        assert_eq!(submission.document.row("Customer"), Some("Acme Farms"));
        assert_eq!(submission.document.issued_at, at());

        assert_eq!(service.lookup_values(FieldName::Driver).unwrap(), vec!["Tendai Moyo"]);
        let history = service.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].product, "Maize");
        assert_eq!(history[0].unit, "Ton");
    }

    #[test]
    fn test_second_submission_adds_no_lookups() {
        let dir = tempdir().unwrap();
        let service = service(FileLookupStore::in_dir(dir.path()), None);
        service.submit_at(acme(), at()).unwrap();

        let again = service
            .submit_at(acme().with(FieldName::Product, "Soya Beans"), at())
            .unwrap();
        assert_eq!(again.new_lookups, vec![FieldName::Product]);
        assert_eq!(
            service.lookups().unwrap()[&FieldName::Product],
            vec!["Maize", "Soya Beans"]
        );
    }

    #[test]
    fn test_incomplete_form_touches_nothing() {
        let dir = tempdir().unwrap();
        let lookups = FileLookupStore::in_dir(dir.path());
        let log = FileRecordLog::in_dir(dir.path());
        let (lookup_path, log_path) = (lookups.path().to_path_buf(), log.path().to_path_buf());
        let service = service(lookups, Some(log));

        let err = service
            .submit_at(acme().with(FieldName::Quantity, ""), at())
            .unwrap_err();
        assert_eq!(err.missing_fields(), Some(&[FieldName::Quantity][..]));
        assert!(!lookup_path.exists());
        assert!(!log_path.exists());
    }

    #[test]
    fn test_lookup_failure_still_renders() {
        let dir = tempdir().unwrap();
        let lookup_path = dir.path().join("delivery_data.csv");
        fs::write(&lookup_path, "Customer\nAcme Farms,extra\n").unwrap();
        let service = service(
            FileLookupStore::new(&lookup_path),
            Some(FileRecordLog::in_dir(dir.path())),
        );

        let submission = service.submit_at(acme(), at()).unwrap();
        assert!(matches!(
            submission.lookup_error,
            Some(Error::StorageUnavailable { .. })
        ));
        assert!(submission.new_lookups.is_empty());
        assert!(submission.log_error.is_none());
        assert_eq!(submission.document.title, "Delivery Note");
        assert_eq!(service.history().unwrap().len(), 1);
    }

    #[test]
    fn test_log_failure_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let service = service(
            FileLookupStore::in_dir(dir.path()),
            Some(FileRecordLog::new(blocker.join("delivery_log.csv"))),
        );

        let submission = service.submit_at(acme(), at()).unwrap();
        assert!(matches!(submission.log_error, Some(Error::StorageWrite { .. })));
        assert!(submission.lookup_error.is_none());
        assert!(!submission.is_clean());
    }

    #[test]
    fn test_history_without_log_is_empty() {
        let dir = tempdir().unwrap();
        let service = service(FileLookupStore::in_dir(dir.path()), None);
        service.submit_at(acme(), at()).unwrap();
        assert!(service.history().unwrap().is_empty());
    }
}
