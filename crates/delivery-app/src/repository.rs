//! Repository adapters for persistence layer

use std::path::Path;

use delivery_domain::service::RecordFormatter;
use delivery_infra::persistence::{FileLookupStore, FileRecordLog};
use delivery_types::Result;

use crate::app::DeliveryService;
use crate::config::Config;

/// Delivery service over the CSV files in the data directory
pub type FileDeliveryService = DeliveryService<FileLookupStore, FileRecordLog>;

/// Open history log in the configured data directory
pub fn open_record_log(config: &Config) -> Result<FileRecordLog> {
    Ok(FileRecordLog::in_dir(&config.data_dir()?))
}

/// Open the delivery service described by `config`
pub fn open_service(config: &Config) -> Result<FileDeliveryService> {
    open_service_at(config, &config.data_dir()?)
}

/// Open the delivery service with files in a custom directory
pub fn open_service_at(config: &Config, data_dir: &Path) -> Result<FileDeliveryService> {
    let formatter = RecordFormatter::new(config.supplier.clone(), config.layout()?);
    let log = config
        .log_enabled
        .then(|| FileRecordLog::in_dir(data_dir));
    Ok(DeliveryService::new(
        FileLookupStore::in_dir(data_dir),
        log,
        formatter,
    ))
}
