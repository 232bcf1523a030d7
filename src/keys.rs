// SPDX-License-Identifier: Apache-2.0

// Well-known preference names used by the update agent. The store itself
// treats keys as opaque, these are exported so hosts share one spelling.

pub const CERTIFICATE_REPORT_TO_SEND_DOWNLOAD: &str = "certificate-report-to-send-download";
pub const CERTIFICATE_REPORT_TO_SEND_UPDATE: &str = "certificate-report-to-send-update";
pub const DELTA_UPDATE_FAILURES: &str = "delta-update-failures";
pub const LAST_ACTIVE_PING_DAY: &str = "last-active-ping-day";
pub const LAST_ROLL_CALL_PING_DAY: &str = "last-roll-call-ping-day";
pub const MANIFEST_METADATA_SIZE: &str = "manifest-metadata-size";
pub const PREVIOUS_VERSION: &str = "previous-version";
pub const RESUMED_UPDATE_FAILURES: &str = "resumed-update-failures";
pub const UPDATE_CHECK_RESPONSE_HASH: &str = "update-check-response-hash";
pub const UPDATE_SERVER_CERTIFICATE: &str = "update-server-cert";
pub const UPDATE_STATE_NEXT_DATA_OFFSET: &str = "update-state-next-data-offset";
pub const UPDATE_STATE_NEXT_OPERATION: &str = "update-state-next-operation";
pub const UPDATE_STATE_SHA256_CONTEXT: &str = "update-state-sha-256-context";
pub const UPDATE_STATE_SIGNATURE_BLOB: &str = "update-state-signature-blob";
pub const UPDATE_STATE_SIGNED_SHA256_CONTEXT: &str = "update-state-signed-sha-256-context";
pub const UPDATE_CHECK_COUNT: &str = "update-check-count";
pub const WALL_CLOCK_WAIT_PERIOD: &str = "wall-clock-wait-period";
pub const UPDATE_FIRST_SEEN_AT: &str = "update-first-seen-at";

pub const PAYLOAD_ATTEMPT_NUMBER: &str = "payload-attempt-number";
pub const CURRENT_RESPONSE_SIGNATURE: &str = "current-response-signature";
pub const CURRENT_URL_INDEX: &str = "current-url-index";
pub const CURRENT_URL_FAILURE_COUNT: &str = "current-url-failure-count";
pub const BACKOFF_EXPIRY_TIME: &str = "backoff-expiry-time";

pub const ALL: &[&str] = &[
    CERTIFICATE_REPORT_TO_SEND_DOWNLOAD,
    CERTIFICATE_REPORT_TO_SEND_UPDATE,
    DELTA_UPDATE_FAILURES,
    LAST_ACTIVE_PING_DAY,
    LAST_ROLL_CALL_PING_DAY,
    MANIFEST_METADATA_SIZE,
    PREVIOUS_VERSION,
    RESUMED_UPDATE_FAILURES,
    UPDATE_CHECK_RESPONSE_HASH,
    UPDATE_SERVER_CERTIFICATE,
    UPDATE_STATE_NEXT_DATA_OFFSET,
    UPDATE_STATE_NEXT_OPERATION,
    UPDATE_STATE_SHA256_CONTEXT,
    UPDATE_STATE_SIGNATURE_BLOB,
    UPDATE_STATE_SIGNED_SHA256_CONTEXT,
    UPDATE_CHECK_COUNT,
    WALL_CLOCK_WAIT_PERIOD,
    UPDATE_FIRST_SEEN_AT,
    PAYLOAD_ATTEMPT_NUMBER,
    CURRENT_RESPONSE_SIGNATURE,
    CURRENT_URL_INDEX,
    CURRENT_URL_FAILURE_COUNT,
    BACKOFF_EXPIRY_TIME,
];
