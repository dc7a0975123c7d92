// Pure helpers around the SDK calls: log query parameters, resource id
// extraction and event message joining.

use crate::error::{RdsTopError, Result};
use aws_sdk_cloudwatchlogs::types::OutputLogEvent;
use aws_sdk_rds::error::{DisplayErrorContext, SdkError};
use aws_sdk_rds::operation::describe_db_instances::DescribeDBInstancesError;
use aws_sdk_rds::types::DbInstance;
use std::fmt::Debug;

/// Log group Enhanced Monitoring writes to; one stream per DB resource id.
pub const LOG_GROUP: &str = "RDSOSMetrics";

/// Parameters for a single GetLogEvents call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEventsQuery {
    pub log_group: String,
    pub log_stream: String,
    pub limit: i32,
    pub start_time_ms: Option<i64>,
    pub start_from_head: Option<bool>,
}

impl LogEventsQuery {
    /// One record from the resource's stream. Without a start time the
    /// service returns the most recent record; with one, the first record at
    /// or after it (reading forward).
    pub fn single_sample(resource_id: &str, start_time: Option<i64>) -> Self {
        let start_time = start_time.filter(|t| *t > 0);
        Self {
            log_group: LOG_GROUP.to_string(),
            log_stream: resource_id.to_string(),
            limit: 1,
            start_time_ms: start_time.map(|t| t.saturating_mul(1000)),
            start_from_head: start_time.map(|_| true),
        }
    }
}

/// Resource id of the first matching instance.
pub(crate) fn resource_id_from(instance_id: &str, instances: &[DbInstance]) -> Result<String> {
    let instance = instances
        .first()
        .ok_or_else(|| RdsTopError::InstanceNotFound(instance_id.to_string()))?;
    instance
        .dbi_resource_id()
        .map(str::to_string)
        .ok_or_else(|| RdsTopError::Service {
            context: "Error getting resource ID",
            message: format!("instance {} has no DbiResourceId", instance_id),
        })
}

/// The control plane reports an unknown identifier as a `DBInstanceNotFound`
/// fault; everything else is a service error.
pub(crate) fn map_describe_error<R: Debug>(
    instance_id: &str,
    err: SdkError<DescribeDBInstancesError, R>,
) -> RdsTopError {
    if err
        .as_service_error()
        .is_some_and(|se| se.is_db_instance_not_found_fault())
    {
        RdsTopError::InstanceNotFound(instance_id.to_string())
    } else {
        RdsTopError::Service {
            context: "Error getting resource ID",
            message: DisplayErrorContext(&err).to_string(),
        }
    }
}

/// Concatenate messages in the order returned. Normally there is exactly one.
pub(crate) fn join_messages(events: &[OutputLogEvent]) -> String {
    events
        .iter()
        .filter_map(|e| e.message())
        .collect::<Vec<_>>()
        .concat()
}
