use crate::config::DashboardConfig;
use crate::fetch::error::FetchError;
use crate::fetch::window::RequestWindow;
use crate::types::coordinate::Coordinate;
use crate::types::parameter::Parameter;
use crate::types::payload::HOURLY_VARIABLES;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Both upstream bodies for one location and window.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayloads {
    /// Climate source body, always present.
    pub daily: Value,
    /// Satellite source body, `None` when that source was unavailable.
    pub hourly: Option<Value>,
}

#[derive(Serialize)]
struct ClimateQuery<'a> {
    parameters: &'a str,
    community: &'a str,
    latitude: f64,
    longitude: f64,
    start: &'a str,
    end: &'a str,
    format: &'a str,
}

#[derive(Serialize)]
struct SatelliteQuery<'a> {
    latitude: f64,
    longitude: f64,
    hourly: &'a str,
    start_date: &'a str,
    end_date: &'a str,
}

pub struct SourceLoader {
    client: Client,
    climate_url: String,
    satellite_url: String,
}

impl SourceLoader {
    pub fn new(config: &DashboardConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self {
            client,
            climate_url: config.climate_url.clone(),
            satellite_url: config.satellite_url.clone(),
        })
    }

    /// Requests both sources concurrently and waits for both to finish.
    ///
    /// Only the climate request can fail the call. Its error is returned after
    /// the satellite request has completed too; neither cancels the other.
    pub async fn fetch(
        &self,
        coordinate: Coordinate,
        window: RequestWindow,
    ) -> Result<RawPayloads, FetchError> {
        let (daily, hourly) = tokio::join!(
            self.fetch_climate(coordinate, window),
            self.fetch_satellite(coordinate, window)
        );
        Ok(RawPayloads {
            daily: daily?,
            hourly,
        })
    }

    async fn fetch_climate(
        &self,
        coordinate: Coordinate,
        window: RequestWindow,
    ) -> Result<Value, FetchError> {
        let (start, end) = window.compact();
        let parameters = Parameter::query_list();
        let request = self
            .client
            .get(&self.climate_url)
            .query(&ClimateQuery {
                parameters: &parameters,
                community: "RE",
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                start: &start,
                end: &end,
                format: "JSON",
            })
            .build()
            .map_err(|e| FetchError::NetworkRequest(self.climate_url.clone(), e))?;
        let url = request.url().to_string();
        info!("Requesting daily parameters from {}", url);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        // The body is handed on regardless of status; error bodies fail normalization.
        if !response.status().is_success() {
            warn!("HTTP {} from climate source {}", response.status(), url);
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::JsonParse(url, e))
    }

    async fn fetch_satellite(&self, coordinate: Coordinate, window: RequestWindow) -> Option<Value> {
        let (start, end) = window.iso();
        let hourly = HOURLY_VARIABLES.join(",");
        let request = self
            .client
            .get(&self.satellite_url)
            .query(&SatelliteQuery {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                hourly: &hourly,
                start_date: &start,
                end_date: &end,
            })
            .build();
        let request = match request {
            Ok(r) => r,
            Err(e) => {
                warn!("Could not build satellite request: {}", e);
                return None;
            }
        };
        let url = request.url().to_string();
        info!("Requesting hourly radiation from {}", url);

        let response = match self.client.execute(request).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Satellite request to {} failed: {:?}", url, e);
                return None;
            }
        };
        if !response.status().is_success() {
            warn!(
                "HTTP {} from satellite source {}, continuing without it",
                response.status(),
                url
            );
            return None;
        }
        match response.json::<Value>().await {
            Ok(body) => {
                debug!("Satellite response parsed for {}", url);
                Some(body)
            }
            Err(e) => {
                warn!("Satellite response from {} is not JSON: {}", url, e);
                None
            }
        }
    }
}
