use crate::prelude::{println, *};
use colored::Colorize;
use mycf_core::input::{SearchParams, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MAX_PAGE, MIN_LIMIT};
use mycf_core::posting::RawSearchResponse;
use mycf_core::search::{build_search_result, resolve_search_term, summarize, JobSearchResult};
use std::future::Future;
use std::time::{Duration, Instant};

pub const DEFAULT_API_URL: &str = "https://api.mycareersfuture.gov.sg/v2/search";
pub const DEFAULT_USER_AGENT: &str = concat!("mycf/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Phrase to search for (defaults to "software engineer")
    #[arg(value_name = "TERM")]
    pub term: Option<String>,

    /// Number of jobs to fetch
    #[arg(
        short,
        long,
        env = "MYCF_LIMIT",
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_LIMIT)..=i64::from(MAX_LIMIT))
    )]
    pub limit: u32,

    /// Page number (0-indexed)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PAGE,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PAGE))
    )]
    pub page: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One outbound search request, with the term already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub term: String,
    pub limit: u32,
    pub page: u32,
}

/// A decoded provider reply and the HTTP status it arrived with
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: reqwest::StatusCode,
    pub body: RawSearchResponse,
}

/// Something that can run a job search against MyCareersFuture
///
/// Keeps the HTTP call out of the orchestration and the MCP tool handler, so both
/// can be exercised with canned responses.
pub trait JobSearchProvider {
    fn fetch(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<ProviderResponse, Error>> + Send;
}

/// HTTP client for the MyCareersFuture search API
#[derive(Debug, Clone)]
pub struct MyCareersFutureClient {
    client: reqwest::Client,
    api_url: String,
}

impl MyCareersFutureClient {
    pub fn new(
        api_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, Error> {
        use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn from_global(global: &crate::Global) -> Result<Self, Error> {
        Self::new(
            global.api_url.clone(),
            Duration::from_secs(global.timeout),
            &global.user_agent,
        )
    }
}

impl JobSearchProvider for MyCareersFutureClient {
    async fn fetch(&self, request: &SearchRequest) -> Result<ProviderResponse, Error> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("limit", request.limit), ("page", request.page)])
            .json(&serde_json::json!({ "search": request.term }))
            .send()
            .await?;

        let status = response.status();
        log::debug!("POST {} -> {}", self.api_url, status);

        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: self.api_url.clone(),
            });
        }

        Ok(ProviderResponse {
            status,
            body: response.json().await?,
        })
    }
}

/// Run one search and normalize the response
///
/// The term is trimmed and defaulted before the request goes out. Failures are
/// returned as-is, without retrying.
pub async fn search_jobs<P: JobSearchProvider>(
    provider: &P,
    params: &SearchParams,
) -> Result<JobSearchResult, Error> {
    let request = SearchRequest {
        term: resolve_search_term(params.search_term.as_deref()),
        limit: params.limit,
        page: params.page,
    };

    log::info!(
        "Requesting MyCareersFuture search (term={:?}, limit={}, page={})",
        request.term,
        request.limit,
        request.page
    );

    let start = Instant::now();
    let response = match provider.fetch(&request).await {
        Ok(response) => response,
        Err(e) => {
            log::error!(
                "MyCareersFuture request failed (term={:?}, limit={}, page={}, elapsed={:.2}s): {e}",
                request.term,
                request.limit,
                request.page,
                start.elapsed().as_secs_f64()
            );
            return Err(e);
        }
    };

    let result = build_search_result(request.term, response.body);

    log::info!(
        "MyCareersFuture search succeeded (term={:?}, status={}, total={}, returned={}, elapsed={:.2}s)",
        result.search_term,
        response.status.as_u16(),
        result.total,
        result.jobs.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(result)
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("MyCareersFuture API: {}", global.api_url);
        println!();
    }

    let client = MyCareersFutureClient::from_global(&global)?;
    let params = SearchParams {
        search_term: options.term.clone(),
        limit: options.limit,
        page: options.page,
    };

    let result = search_jobs(&client, &params).await?;

    if options.json {
        println!("{}", format_result_json(&result)?);
    } else {
        println!("{}", format_result_text(&result, &options).trim_end());
    }

    Ok(())
}

/// Convert a search result to the same JSON the MCP tool returns as structured content
fn format_result_json(result: &JobSearchResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a search result to formatted text with colors
fn format_result_text(result: &JobSearchResult, options: &SearchOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    out.push_str(&format!(
        "{}\n",
        format!(
            "MYCAREERSFUTURE JOBS FOR '{}' (Page {})",
            result.search_term.to_uppercase(),
            options.page
        )
        .bright_cyan()
        .bold()
    ));
    out.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    for (idx, job) in result.jobs.iter().enumerate() {
        let number = options.page as usize * options.limit as usize + idx + 1;
        out.push_str(&format!(
            "\n{} {}\n",
            format!("[{number}]").yellow().bold(),
            job.title.white().bold()
        ));

        if let Some(company) = &job.company {
            out.push_str(&format!("    {}: {}\n", "Company".green(), company.bright_white()));
        }

        if let Some(salary) = &job.salary {
            out.push_str(&format!("    {}: {}\n", "Salary".green(), salary.bright_yellow()));
        }

        let place = match (&job.location, &job.region) {
            (Some(location), Some(region)) => Some(format!("{location} ({region})")),
            (Some(location), None) => Some(location.clone()),
            (None, Some(region)) => Some(region.clone()),
            (None, None) => None,
        };
        if let Some(place) = place {
            out.push_str(&format!("    {}: {}\n", "Location".green(), place));
        }

        if !job.employment_types.is_empty() {
            out.push_str(&format!(
                "    {}: {}\n",
                "Type".green(),
                job.employment_types.join(", ")
            ));
        }

        if !job.categories.is_empty() {
            out.push_str(&format!(
                "    {}: {}\n",
                "Categories".green(),
                job.categories.join(", ").bright_black()
            ));
        }

        if let Some(posted_at) = &job.posted_at {
            out.push_str(&format!("    {}: {}\n", "Posted".green(), posted_at.bright_black()));
        }

        if let Some(url) = &job.url {
            out.push_str(&format!("    {}: {}\n", "URL".green(), url.cyan().underline()));
        }
    }

    out.push_str(&format!("\n{}\n", summarize(result).bright_white().bold()));

    if !result.jobs.is_empty() {
        out.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
        if u64::from(options.page + 1) * u64::from(options.limit) < result.total
            && options.page < MAX_PAGE
        {
            out.push_str(&format!(
                "  {}: {}\n",
                "Next page".green(),
                format!(
                    "mycf search '{}' --page {}",
                    result.search_term,
                    options.page + 1
                )
                .cyan()
            ));
        }
        if options.page > 0 {
            out.push_str(&format!(
                "  {}: {}\n",
                "Previous page".green(),
                format!(
                    "mycf search '{}' --page {}",
                    result.search_term,
                    options.page - 1
                )
                .cyan()
            ));
        }
        out.push_str(&format!(
            "  {}: {}\n",
            "JSON output".green(),
            format!("mycf search '{}' --json", result.search_term).cyan()
        ));
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use mycf_core::posting::JobPosting;
    use serde_json::json;

    fn create_test_job(id: &str, title: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: Some("ACME PTE. LTD.".to_string()),
            url: Some(format!("https://www.mycareersfuture.gov.sg/job/{id}")),
            salary: Some("$5,000 – $7,000 Monthly".to_string()),
            location: Some("1 Fusionopolis Way".to_string()),
            region: Some("Central".to_string()),
            categories: vec!["Information Technology".to_string()],
            employment_types: vec!["Full Time".to_string()],
            skills: vec!["Rust".to_string()],
            updated_at: None,
            posted_at: Some("2024-04-30".to_string()),
            score: None,
            lat: None,
            lng: None,
        }
    }

    fn create_test_options(page: u32, limit: u32) -> SearchOptions {
        SearchOptions {
            term: None,
            limit,
            page,
            json: false,
        }
    }

    fn create_test_result(jobs: Vec<JobPosting>, total: u64) -> JobSearchResult {
        JobSearchResult {
            search_term: "software engineer".to_string(),
            total,
            jobs,
        }
    }

    fn params(term: Option<&str>, limit: u32, page: u32) -> SearchParams {
        SearchParams {
            search_term: term.map(str::to_string),
            limit,
            page,
        }
    }

    fn client_for(server: &MockServer) -> MyCareersFutureClient {
        MyCareersFutureClient::new(
            server.url("/v2/search"),
            Duration::from_secs(5),
            DEFAULT_USER_AGENT,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_jobs_posts_term_and_pagination() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v2/search")
                    .query_param("limit", "3")
                    .query_param("page", "1")
                    .header("content-type", "application/json")
                    .header("accept", "application/json")
                    .header("user-agent", DEFAULT_USER_AGENT)
                    .json_body(json!({ "search": "data analyst" }));
                then.status(200).json_body(json!({
                    "results": [
                        { "title": "Data Analyst", "metadata": { "jobPostId": "MCF-1" } },
                        { "title": "Senior Data Analyst", "metadata": { "jobPostId": "MCF-2" } },
                        { "title": "Lead Data Analyst", "uuid": "u-3" }
                    ],
                    "total": 150
                }));
            })
            .await;

        let result = search_jobs(&client_for(&server), &params(Some("  data analyst "), 3, 1))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.search_term, "data analyst");
        assert_eq!(result.total, 150);
        let ids: Vec<&str> = result.jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["MCF-1", "MCF-2", "u-3"]);
    }

    #[tokio::test]
    async fn test_fetch_reports_provider_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/search");
                then.status(203)
                    .json_body(json!({ "results": [{ "title": "Welder" }], "total": 9 }));
            })
            .await;

        let request = SearchRequest {
            term: "welder".to_string(),
            limit: 1,
            page: 0,
        };
        let response = client_for(&server).fetch(&request).await.unwrap();

        assert_eq!(response.status.as_u16(), 203);
        assert_eq!(response.body.total, Some(9));
        assert_eq!(response.body.results.len(), 1);
    }

    #[tokio::test]
    async fn test_search_jobs_blank_term_uses_default() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v2/search")
                    .json_body(json!({ "search": "software engineer" }));
                then.status(200).json_body(json!({ "results": [] }));
            })
            .await;

        let result = search_jobs(&client_for(&server), &params(Some("   "), 20, 0))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.search_term, "software engineer");
        assert_eq!(result.total, 0);
        assert!(result.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_search_jobs_empty_body_object() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/search");
                then.status(200).json_body(json!({}));
            })
            .await;

        let result = search_jobs(&client_for(&server), &params(None, 20, 0))
            .await
            .unwrap();

        assert_eq!(result.total, 0);
        assert!(result.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_search_jobs_non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/search");
                then.status(503).body("unavailable");
            })
            .await;

        let err = search_jobs(&client_for(&server), &params(None, 20, 0))
            .await
            .unwrap_err();

        mock.assert_hits_async(1).await;
        match err {
            Error::Status { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_jobs_invalid_json_is_a_transport_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v2/search");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let err = search_jobs(&client_for(&server), &params(None, 20, 0))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn test_search_jobs_unreachable_provider() {
        let client = MyCareersFutureClient::new(
            "http://127.0.0.1:9/v2/search",
            Duration::from_secs(2),
            DEFAULT_USER_AGENT,
        )
        .unwrap();

        let err = search_jobs(&client, &params(None, 20, 0)).await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_search_options_limit_range() {
        use clap::Parser;

        #[derive(Debug, clap::Parser)]
        struct Cli {
            #[command(flatten)]
            options: SearchOptions,
        }

        let cli = Cli::try_parse_from(["search", "nurse", "--limit", "50", "--page", "50"]).unwrap();
        assert_eq!(cli.options.term.as_deref(), Some("nurse"));
        assert_eq!((cli.options.limit, cli.options.page), (50, 50));

        assert!(Cli::try_parse_from(["search", "--limit", "51"]).is_err());
        assert!(Cli::try_parse_from(["search", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["search", "--page", "51"]).is_err());
    }

    #[test]
    fn test_format_result_json_structure() {
        let result = create_test_result(vec![create_test_job("MCF-1", "Backend Engineer")], 10);

        let json = format_result_json(&result).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["searchTerm"], "software engineer");
        assert_eq!(parsed["total"], 10);
        assert_eq!(parsed["jobs"][0]["jobUrl"], "https://www.mycareersfuture.gov.sg/job/MCF-1");
        assert_eq!(parsed["jobs"][0]["employmentTypes"][0], "Full Time");
    }

    #[test]
    fn test_format_result_text_basic() {
        let result = create_test_result(vec![create_test_job("MCF-1", "Backend Engineer")], 1);
        let formatted = format_result_text(&result, &create_test_options(0, 20));

        assert!(formatted.contains("MYCAREERSFUTURE JOBS FOR 'SOFTWARE ENGINEER'"));
        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("Backend Engineer"));
        assert!(formatted.contains("ACME PTE. LTD."));
        assert!(formatted.contains("$5,000 – $7,000 Monthly"));
        assert!(formatted.contains("1 Fusionopolis Way (Central)"));
        assert!(formatted.contains("Found 1 jobs for 'software engineer'. Showing top 1 results."));
    }

    #[test]
    fn test_format_result_text_numbers_follow_page() {
        let jobs = vec![create_test_job("a", "First"), create_test_job("b", "Second")];
        let result = create_test_result(jobs, 100);
        let formatted = format_result_text(&result, &create_test_options(2, 10));

        assert!(formatted.contains("[21]"));
        assert!(formatted.contains("[22]"));
    }

    #[test]
    fn test_format_result_text_empty() {
        let result = create_test_result(vec![], 0);
        let formatted = format_result_text(&result, &create_test_options(0, 20));

        assert!(formatted.contains("No jobs found for 'software engineer'. Try a broader search."));
        assert!(!formatted.contains("To navigate"));
    }

    #[test]
    fn test_format_result_text_navigation() {
        let result = create_test_result(vec![create_test_job("a", "First")], 100);

        let first = format_result_text(&result, &create_test_options(0, 10));
        assert!(first.contains("Next page"));
        assert!(!first.contains("Previous page"));

        let middle = format_result_text(&result, &create_test_options(3, 10));
        assert!(middle.contains("Next page"));
        assert!(middle.contains("Previous page"));

        let last = format_result_text(&result, &create_test_options(9, 10));
        assert!(!last.contains("Next page"));
        assert!(last.contains("Previous page"));
    }

    #[test]
    fn test_format_result_text_missing_fields() {
        let mut job = create_test_job("a", "Untitled role");
        job.company = None;
        job.salary = None;
        job.location = None;
        job.region = None;
        job.url = None;
        let result = create_test_result(vec![job], 1);

        let formatted = format_result_text(&result, &create_test_options(0, 20));

        assert!(formatted.contains("Untitled role"));
        assert!(!formatted.contains("Company"));
        assert!(!formatted.contains("Salary"));
        assert!(!formatted.contains("Location"));
        assert!(!formatted.contains("URL"));
    }
}
