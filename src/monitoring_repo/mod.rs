// Latest Enhanced Monitoring sample via the RDS and CloudWatch Logs APIs

mod query;
mod session;

pub use query::{LOG_GROUP, LogEventsQuery};
pub use session::AwsSession;

use crate::error::{RdsTopError, Result};
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use query::{join_messages, map_describe_error, resource_id_from};
use tracing::{debug, instrument, warn};

pub struct MonitoringRepo {
    rds: aws_sdk_rds::Client,
    logs: aws_sdk_cloudwatchlogs::Client,
}

impl MonitoringRepo {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            rds: session.rds_client(),
            logs: session.logs_client(),
        }
    }

    /// Raw JSON text of the sample closest to `start_time` (epoch seconds),
    /// or of the most recent sample when no start time is given.
    pub async fn latest_sample(&self, instance_id: &str, start_time: Option<i64>) -> Result<String> {
        let resource_id = self.resolve_resource_id(instance_id).await?;
        let query = LogEventsQuery::single_sample(&resource_id, start_time);
        self.fetch_log_message(&query).await
    }

    /// Map the user-facing instance name to its rename-stable resource id,
    /// which names the log stream.
    #[instrument(skip(self), fields(repo = "monitoring", operation = "resolve_resource_id"))]
    pub async fn resolve_resource_id(&self, instance_id: &str) -> Result<String> {
        let output = self
            .rds
            .describe_db_instances()
            .db_instance_identifier(instance_id)
            .send()
            .await
            .map_err(|e| map_describe_error(instance_id, e))?;

        let resource_id = resource_id_from(instance_id, output.db_instances())?;
        debug!(resource_id = %resource_id, "resolved resource id");
        Ok(resource_id)
    }

    #[instrument(skip(self), fields(repo = "monitoring", operation = "fetch_log_message"))]
    pub async fn fetch_log_message(&self, query: &LogEventsQuery) -> Result<String> {
        let output = self
            .logs
            .get_log_events()
            .log_group_name(&query.log_group)
            .log_stream_name(&query.log_stream)
            .limit(query.limit)
            .set_start_time(query.start_time_ms)
            .set_start_from_head(query.start_from_head)
            .send()
            .await
            .map_err(|e| RdsTopError::Service {
                context: "Error getting log events",
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let events = output.events();
        debug!(events = events.len(), "log events returned");
        if events.is_empty() {
            warn!(log_stream = %query.log_stream, "no monitoring records returned");
        }
        Ok(join_messages(events))
    }
}
