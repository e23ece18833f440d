/*
[INPUT]:  Contest identifiers, contest type and page numbers
[OUTPUT]: Contest listings, contest details and scoreboards
[POS]:    HTTP layer - contest endpoints
[UPDATE]: When adding new contest endpoints or changing response format
*/

use crate::http::{NssClient, Result};
use crate::types::{ContestDetail, ContestPage, RankBoard};

/// Contest visibility accepted by the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestKind {
    Public,
    Private,
}

impl ContestKind {
    fn path_value(self) -> u8 {
        match self {
            ContestKind::Public => 0,
            ContestKind::Private => 1,
        }
    }
}

impl NssClient {
    /// GET contest/{kind}/list/{page}/
    pub async fn get_contest_list(&self, kind: ContestKind, page: u32) -> Result<ContestPage> {
        self.get(&format!("contest/{}/list/{page}/", kind.path_value()))
            .await
    }

    /// GET contest/{cid}/info/
    pub async fn get_contest_info(&self, cid: u64) -> Result<ContestDetail> {
        self.get(&format!("contest/{cid}/info/")).await
    }

    /// Scoreboard page; the server refreshes it every 60 seconds
    ///
    /// GET contest/{cid}/rank/list/{page}/
    pub async fn get_contest_rank_list(&self, cid: u64, page: u32) -> Result<RankBoard> {
        self.get(&format!("contest/{cid}/rank/list/{page}/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::ContestKind;
    use crate::auth::AuthConfig;
    use crate::http::{ClientConfig, ErrorKind, NssClient};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NssClient {
        NssClient::with_config(
            AuthConfig::new("test-key", "test-secret"),
            ClientConfig::default().with_base_url(format!("{}/v2/api/", server.uri())),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_contest_list_private() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/api/contest/1/list/2/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "data": {
                    "contests": [{"id": 11, "title": "weekly", "state": 2}],
                    "total": 21
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server)
            .get_contest_list(ContestKind::Private, 2)
            .await
            .expect("get_contest_list failed");
        assert_eq!(page.total, 21);
        assert_eq!(page.contests[0].id, 11);
        assert_eq!(page.contests[0].state, 2);
    }

    #[tokio::test]
    async fn test_get_contest_rank_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/api/contest/11/rank/list/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "data": {
                    "category": ["1"],
                    "point": {"5": 300},
                    "problems": [[5, 2, "warmup"]],
                    "top3": {"5": ["8", "13"]},
                    "solves": [],
                    "team": false,
                    "total": 0
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let board = client_for(&server)
            .get_contest_rank_list(11, 1)
            .await
            .expect("get_contest_rank_list failed");
        assert_eq!(board.problems[0].2, "warmup");
        assert_eq!(board.top3.get("5").map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_get_contest_info_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/api/contest/404/info/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 3001,
                "data": null
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_contest_info(404)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::ContestNotExist));
    }
}
