use crate::config::{
    join_url, DashboardConfig, LOG_MOOD_PATH, MONTHLY_PATH, PROBE_PATH, WEEKLY_PATH,
};
use crate::errors::ClientError;
use crate::models::{LogMoodRequest, MoodEntry};
use chrono::NaiveDate;
use reqwest::{
    cookie::{CookieStore, Jar},
    redirect::Policy,
    Client, Url,
};
use std::{future::Future, sync::Arc};
use tracing::debug;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub trait MoodApi: Send + Sync {
    /// `true` when the authenticated-only probe path answered without redirecting.
    fn probe_session(&self) -> impl Future<Output = Result<bool, ClientError>> + Send;

    fn log_mood(
        &self,
        request: &LogMoodRequest,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Entries for the week containing `date`, or whatever the backend calls
    /// "this week" when `date` is `None`.
    fn weekly(
        &self,
        date: Option<NaiveDate>,
    ) -> impl Future<Output = Result<Vec<MoodEntry>, ClientError>> + Send;

    fn monthly(&self) -> impl Future<Output = Result<Vec<MoodEntry>, ClientError>> + Send;
}

pub struct HttpApi {
    client: Client,
    jar: Arc<Jar>,
    base: Url,
    root: String,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_url).map_err(|err| {
            ClientError::invalid_config(format!("bad base url '{}': {err}", config.base_url))
        })?;

        let jar = Arc::new(Jar::default());
        if let Some(cookies) = &config.session_cookie {
            for pair in cookies.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
                jar.add_cookie_str(pair, &base);
            }
        }

        // Redirects stay visible as 3xx so the session probe can see them.
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .redirect(Policy::none())
            .build()
            .map_err(ClientError::network)?;

        Ok(Self {
            client,
            jar,
            base,
            root: config.base_url.clone(),
        })
    }

    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base)?;
        let header = header.to_str().ok()?;
        cookie_value(header, CSRF_COOKIE)
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Url::parse(&join_url(&self.root, path))
            .map_err(|err| ClientError::invalid_config(format!("bad path '{path}': {err}")))
    }

    async fn fetch_entries(&self, url: Url) -> Result<Vec<MoodEntry>, ClientError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16()));
        }
        let entries = response.json::<Vec<MoodEntry>>().await?;
        Ok(entries)
    }
}

impl MoodApi for HttpApi {
    async fn probe_session(&self) -> Result<bool, ClientError> {
        let response = self.client.get(self.url(PROBE_PATH)?).send().await?;
        let redirected = response.status().is_redirection();
        debug!(status = %response.status(), redirected, "session probe");
        Ok(!redirected)
    }

    async fn log_mood(&self, request: &LogMoodRequest) -> Result<(), ClientError> {
        let mut builder = self.client.post(self.url(LOG_MOOD_PATH)?).json(request);
        if let Some(token) = self.csrf_token() {
            builder = builder.header(CSRF_HEADER, token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16()));
        }
        Ok(())
    }

    async fn weekly(&self, date: Option<NaiveDate>) -> Result<Vec<MoodEntry>, ClientError> {
        let path = match date {
            Some(date) => format!("{WEEKLY_PATH}?date={}", date.format("%Y-%m-%d")),
            None => WEEKLY_PATH.to_string(),
        };
        self.fetch_entries(self.url(&path)?).await
    }

    async fn monthly(&self) -> Result<Vec<MoodEntry>, ClientError> {
        self.fetch_entries(self.url(MONTHLY_PATH)?).await
    }
}

pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_cookie() {
        let header = "sessionid=abc; csrftoken=tok%3Den; theme=dark";
        assert_eq!(cookie_value(header, "csrftoken").as_deref(), Some("tok=en"));
        assert_eq!(cookie_value(header, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_value_does_not_match_prefixes() {
        assert_eq!(cookie_value("csrftokenx=1", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn csrf_token_is_read_from_seeded_jar() {
        let config = DashboardConfig {
            base_url: "http://127.0.0.1:8000".to_string(),
            session_cookie: Some("sessionid=s1; csrftoken=a%20b".to_string()),
            ..DashboardConfig::default()
        };
        let api = HttpApi::new(&config).unwrap();
        assert_eq!(api.csrf_token().as_deref(), Some("a b"));
    }

    #[test]
    fn api_and_navigation_urls_share_the_base_path() {
        let config = DashboardConfig {
            base_url: "http://moods.local/app".to_string(),
            ..DashboardConfig::default()
        };
        let api = HttpApi::new(&config).unwrap();
        assert_eq!(
            api.url(WEEKLY_PATH).unwrap().as_str(),
            "http://moods.local/app/api/weekly/"
        );
        assert_eq!(api.url(PROBE_PATH).unwrap().as_str(), config.url(PROBE_PATH));
        assert_eq!(
            api.url(&format!("{WEEKLY_PATH}?date=2024-06-12")).unwrap().as_str(),
            "http://moods.local/app/api/weekly/?date=2024-06-12"
        );
    }

    #[test]
    fn bad_base_url_is_a_config_error() {
        let config = DashboardConfig {
            base_url: "not a url".to_string(),
            ..DashboardConfig::default()
        };
        let err = HttpApi::new(&config).err().unwrap();
        assert_eq!(err.kind, crate::errors::ErrorKind::InvalidConfig);
    }
}
