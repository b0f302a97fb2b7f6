//! Lookup table of every closed-value enum in the model
//!
//! Lets tooling list the registered literals of an enum or check a raw wire
//! value against it without knowing the Rust type at compile time.

use crate::codec::{ClosedValue, ScalarKind};
use crate::error::Result;
use crate::model::{
    backup, common, configuration, diagnosis, instance, job, log, postgresql, proxy, sqlserver,
    tag,
};

/// Result of checking a raw value against an enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCheck {
    /// Decoded raw value
    pub value: String,
    /// Whether the value is a registered literal
    pub known: bool,
}

/// A closed-value enum, type-erased
#[derive(Clone, Copy)]
pub struct EnumEntry {
    pub name: &'static str,
    pub kind: ScalarKind,
    values: fn() -> Vec<String>,
    check: fn(&[u8], bool) -> Result<EnumCheck>,
}

impl EnumEntry {
    fn of<T: ClosedValue>() -> Self {
        Self {
            name: T::TYPE_NAME,
            kind: T::KIND,
            values: registry_values::<T>,
            check: check_value::<T>,
        }
    }

    /// Registered literals, in declaration order
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        (self.values)()
    }

    /// Decodes raw JSON bytes; with `strict` an unregistered value is an error
    pub fn check(&self, raw: &[u8], strict: bool) -> Result<EnumCheck> {
        (self.check)(raw, strict)
    }
}

impl std::fmt::Debug for EnumEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

fn registry_values<T: ClosedValue>() -> Vec<String> {
    T::registry()
        .iter()
        .map(|value| value.to_scalar().to_string())
        .collect()
}

fn check_value<T: ClosedValue>(raw: &[u8], strict: bool) -> Result<EnumCheck> {
    let value = if strict {
        T::decode_strict(raw)?
    } else {
        T::decode(raw)?
    };
    Ok(EnumCheck {
        value: value.to_scalar().to_string(),
        known: value.is_known(),
    })
}

/// Every closed-value enum, sorted by name
#[must_use]
pub fn enums() -> Vec<EnumEntry> {
    let mut entries = vec![
        EnumEntry::of::<common::Language>(),
        EnumEntry::of::<common::DatastoreType>(),
        EnumEntry::of::<common::DatastoreName>(),
        EnumEntry::of::<common::ChargeMode>(),
        EnumEntry::of::<common::PeriodType>(),
        EnumEntry::of::<common::HaMode>(),
        EnumEntry::of::<common::ReplicationMode>(),
        EnumEntry::of::<common::VolumeType>(),
        EnumEntry::of::<instance::InstanceType>(),
        EnumEntry::of::<instance::InstanceMode>(),
        EnumEntry::of::<instance::InstanceStatus>(),
        EnumEntry::of::<instance::FailoverStrategy>(),
        EnumEntry::of::<instance::RestoreType>(),
        EnumEntry::of::<instance::EnlargeTriggerThreshold>(),
        EnumEntry::of::<instance::MonitorInterval>(),
        EnumEntry::of::<backup::BackupStatus>(),
        EnumEntry::of::<backup::BackupType>(),
        EnumEntry::of::<backup::OffSiteBackupType>(),
        EnumEntry::of::<backup::OffSitePolicyBackupType>(),
        EnumEntry::of::<configuration::ParameterType>(),
        EnumEntry::of::<postgresql::HbaConnectionType>(),
        EnumEntry::of::<postgresql::HbaAuthMethod>(),
        EnumEntry::of::<sqlserver::SqlserverDatabaseState>(),
        EnumEntry::of::<proxy::ProxyStatus>(),
        EnumEntry::of::<proxy::ProxyMode>(),
        EnumEntry::of::<proxy::ProxyRouteMode>(),
        EnumEntry::of::<log::SlowLogType>(),
        EnumEntry::of::<log::ErrorLogLevel>(),
        EnumEntry::of::<log::DownloadStatus>(),
        EnumEntry::of::<tag::TagAction>(),
        EnumEntry::of::<diagnosis::DiagnosisName>(),
        EnumEntry::of::<job::JobStatus>(),
    ];
    entries.sort_by_key(|entry| entry.name);
    entries
}

/// Looks an enum up by type name, ignoring ASCII case
#[must_use]
pub fn find(name: &str) -> Option<EnumEntry> {
    enums()
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}
