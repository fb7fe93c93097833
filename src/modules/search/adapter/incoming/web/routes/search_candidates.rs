use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::search::application::use_cases::search_candidates::SearchCandidatesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[post("/api/search")]
pub async fn search_candidates_handler(
    _user: VerifiedUser,
    req: web::Json<SearchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .search_candidates_use_case
        .execute(&req.into_inner().query)
        .await
    {
        Ok(result) => ApiResponse::success(result),

        Err(SearchCandidatesError::SearchUnavailable(e)) => {
            error!("AI search backend unavailable: {}", e);
            ApiResponse::bad_gateway(
                "SEARCH_UNAVAILABLE",
                "Candidate search is temporarily unavailable",
            )
        }

        Err(SearchCandidatesError::RepositoryError(e)) => {
            error!("Repository error enriching search results: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::modules::search::application::use_cases::search_candidates::{
        CandidateProfile, EnrichedCandidate, ISearchCandidatesUseCase, SearchCandidatesError,
        SearchCandidatesResult,
    };

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider};

    #[derive(Clone)]
    struct MockSearchCandidatesUseCase {
        result: Result<SearchCandidatesResult, SearchCandidatesError>,
    }

    #[async_trait]
    impl ISearchCandidatesUseCase for MockSearchCandidatesUseCase {
        async fn execute(
            &self,
            _query: &str,
        ) -> Result<SearchCandidatesResult, SearchCandidatesError> {
            self.result.clone()
        }
    }

    fn search_result(job_seeker_id: Uuid) -> SearchCandidatesResult {
        SearchCandidatesResult {
            status: "success".to_string(),
            candidates: vec![EnrichedCandidate {
                job_seeker_id,
                match_score: 0.91,
                match_reason: "strong backend experience".to_string(),
                keywords: vec!["rust".to_string()],
                profile: Some(CandidateProfile {
                    name: "Kim Jiwoo".to_string(),
                    school_name: "Hanyang University".to_string(),
                    major: "Computer Science".to_string(),
                    gpa: Some(3.8),
                    awards_count: 2,
                }),
            }],
            search_time: 0.37,
            total_results: 1,
        }
    }

    #[actix_web::test]
    async fn test_search_candidates_success() {
        let user_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();

        let app_state = TestAppStateBuilder::default()
            .with_search_candidates(MockSearchCandidatesUseCase {
                result: Ok(search_result(candidate_id)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider()))
                .service(search_candidates_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/search")
            .insert_header(("Authorization", bearer(user_id, true)))
            .set_json(json!({ "query": "rust backend engineer" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total_results"], 1);
        assert_eq!(
            body["data"]["candidates"][0]["profile"]["name"],
            "Kim Jiwoo"
        );
    }

    #[actix_web::test]
    async fn test_search_candidates_backend_down_bad_gateway() {
        let user_id = Uuid::new_v4();

        let app_state = TestAppStateBuilder::default()
            .with_search_candidates(MockSearchCandidatesUseCase {
                result: Err(SearchCandidatesError::SearchUnavailable(
                    "connection refused".to_string(),
                )),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider()))
                .service(search_candidates_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/search")
            .insert_header(("Authorization", bearer(user_id, true)))
            .set_json(json!({ "query": "rust backend engineer" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SEARCH_UNAVAILABLE");
    }
}
