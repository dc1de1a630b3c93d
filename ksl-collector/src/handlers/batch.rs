use k8s_openapi::api::batch::v1 as batchv1;

use super::*;

const JOB_CONDITIONS: &[&str] = &["Complete", "Failed", "Suspended"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JobData {
    parallelism: Option<i32>,
    completions: Option<i32>,
    backoff_limit: Option<i32>,
    suspend: Option<bool>,
    active: Option<i32>,
    succeeded: Option<i32>,
    failed: Option<i32>,
    start_time: Option<i64>,
    completion_time: Option<i64>,
    condition_complete: Option<bool>,
    condition_failed: Option<bool>,
    condition_suspended: Option<bool>,
    conditions: BTreeMap<String, bool>,
}

pub struct JobMapper;

impl ObjectMapper for JobMapper {
    type Object = batchv1::Job;

    const RESOURCE_TYPE: &'static str = "job";

    fn map(&self, job: &batchv1::Job, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = job.spec.as_ref();
        let status = job.status.as_ref();
        let conditions = status.and_then(|s| s.conditions.as_deref()).unwrap_or_default();

        single_record(Self::RESOURCE_TYPE, job, ts, &JobData {
            parallelism: spec.and_then(|s| s.parallelism),
            completions: spec.and_then(|s| s.completions),
            backoff_limit: spec.and_then(|s| s.backoff_limit),
            suspend: spec.and_then(|s| s.suspend),
            active: status.and_then(|s| s.active),
            succeeded: status.and_then(|s| s.succeeded),
            failed: status.and_then(|s| s.failed),
            start_time: timestamp_of(status.and_then(|s| s.start_time.as_ref())),
            completion_time: timestamp_of(status.and_then(|s| s.completion_time.as_ref())),
            condition_complete: condition_status(conditions, "Complete"),
            condition_failed: condition_status(conditions, "Failed"),
            condition_suspended: condition_status(conditions, "Suspended"),
            conditions: other_conditions(conditions, JOB_CONDITIONS),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CronJobData {
    schedule: Option<String>,
    time_zone: Option<String>,
    suspend: Option<bool>,
    concurrency_policy: Option<String>,
    active_jobs: Option<usize>,
    last_schedule_time: Option<i64>,
    last_successful_time: Option<i64>,
}

pub struct CronJobMapper;

impl ObjectMapper for CronJobMapper {
    type Object = batchv1::CronJob;

    const RESOURCE_TYPE: &'static str = "cronjob";

    fn map(&self, cj: &batchv1::CronJob, ts: DateTime<Utc>) -> anyhow::Result<Vec<NormalizedRecord>> {
        let spec = cj.spec.as_ref();
        let status = cj.status.as_ref();

        single_record(Self::RESOURCE_TYPE, cj, ts, &CronJobData {
            schedule: spec.map(|s| s.schedule.clone()),
            time_zone: spec.and_then(|s| s.time_zone.clone()),
            suspend: spec.and_then(|s| s.suspend),
            concurrency_policy: spec.and_then(|s| s.concurrency_policy.clone()),
            active_jobs: status.map(|s| s.active.as_ref().map_or(0, Vec::len)),
            last_schedule_time: timestamp_of(status.and_then(|s| s.last_schedule_time.as_ref())),
            last_successful_time: timestamp_of(status.and_then(|s| s.last_successful_time.as_ref())),
        })
    }
}
