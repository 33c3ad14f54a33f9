//! Field catalogs for each product.
//!
//! These are the fields the analytics API exposes for grouping and
//! selection. The builder does not check them; the CLI does.

/// Fields available on the `httpEvents` root.
pub const EVENTS_FIELDS: &[&str] = &[
    "ts", "source", "virtualhostId", "configurationId", "solutionId", "host", "requestTime",
    "requestMethod", "upstreamCacheStatus", "status", "proxyStatus", "upstreamStatus",
    "upstreamStatusStr", "upstreamBytesReceived", "scheme", "requestUri", "sessionid",
    "streamname", "sentHttpContentType", "serverProtocol", "requestLength", "bytesSent",
    "upstreamConnectTime", "upstreamHeaderTime", "upstreamResponseTime", "tcpinfoRtt",
    "remoteAddress", "remotePort", "naxsiAttackFamily", "naxsiAttackAction",
    "geolocCountryName", "geolocRegionName", "sslProtocol", "sslCipher", "sslSessionReused",
    "httpUserAgent", "httpReferer", "sentHttpXOriginalImageSize", "serverAddr", "upstreamAddr",
    "upstreamBytesSent", "wafLearning", "wafBlock", "wafTotalProcessed", "wafTotalBlocked",
    "wafScore", "wafMatch", "wafEvheaders", "requestId", "sslServerName", "stacktrace",
    "debugLog", "serverPort", "geolocAsn", "upstreamBytesReceivedStr", "upstreamConnectTimeStr",
    "upstreamHeaderTimeStr", "upstreamResponseTimeStr", "upstreamAddrStr",
    "upstreamBytesSentStr", "count", "sum", "max", "min", "avg",
];

/// Fields available on the `httpMetrics` root.
pub const METRICS_FIELDS: &[&str] = &[
    "configurationId", "host", "requestMethod", "upstreamCacheStatus", "status", "proxyStatus",
    "upstreamStatus", "scheme", "naxsiAttackFamily", "geolocCountryName", "geolocRegionName",
    "wafLearning", "wafBlock", "sourceLocPop", "remoteAddressClass", "requestTime",
    "upstreamBytesReceived", "requestLength", "bytesSent", "upstreamResponseTime", "requests",
    "dataTransferredIn", "dataTransferredOut", "dataTransferredTotal", "offload", "savedData",
    "missedData", "bandwidthTotal", "bandwidthSavedData", "bandwidthMissedData",
    "bandwidthOffload", "httpRequestsTotal", "httpsRequestsTotal", "edgeRequestsTotal",
    "edgeRequestsTotalPerSecond", "requestsOffloaded", "savedRequests", "missedRequests",
    "savedRequestsPerSecond", "missedRequestsPerSecond", "requestsPerSecondOffloaded",
    "requestsStatusCode2xx", "requestsStatusCode200", "requestsStatusCode204",
    "requestsStatusCode206", "requestsStatusCode3xx", "requestsStatusCode301",
    "requestsStatusCode302", "requestsStatusCode304", "requestsStatusCode4xx",
    "requestsStatusCode400", "requestsStatusCode403", "requestsStatusCode404",
    "requestsStatusCode5xx", "requestsStatusCode500", "requestsStatusCode502",
    "requestsStatusCode503", "requestsHttpMethodGet", "requestsHttpMethodPost",
    "requestsHttpMethodHead", "requestsHttpMethodOthers", "wafRequestsThreat",
    "wafRequestsBlocked", "wafRequestsAllowed", "wafRequestsXssAttacks",
    "wafRequestsRfiAttacks", "wafRequestsSqlAttacks", "wafRequestsOthersAttacks",
    "bandwidthImagesProcessedSavedData", "count", "sum", "max", "min", "avg",
];
