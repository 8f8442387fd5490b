//! HTTP による学習者情報の取得（`GET /users/{userId}?fields=...`）

use crate::adapter::api_client::ApiClient;
use crate::domain::{CourseTree, Credentials, LanguagePair};
use crate::ports::outbound::LearnerProfile;
use common::error::Error;
use common::ports::outbound::HttpResponse;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserCourse {
    #[serde(default)]
    current_course: Option<CourseTree>,
}

/// ユーザー API から言語設定とコースを取得する LearnerProfile 実装
pub struct HttpLearnerProfile {
    client: Arc<ApiClient>,
}

impl HttpLearnerProfile {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn fetch_user_fields(&self, credentials: &Credentials, fields: &str) -> Result<HttpResponse, Error> {
        let path = format!(
            "users/{}?fields={}",
            urlencoding::encode(&credentials.user_id),
            fields
        );
        let response = self.client.get(credentials, &path)?;
        if !response.is_success() {
            return Err(Error::http(format!(
                "GET users/{} returned status {}: {}",
                credentials.user_id, response.status, response.body
            )));
        }
        Ok(response)
    }
}

impl LearnerProfile for HttpLearnerProfile {
    fn user_languages(&self, credentials: &Credentials) -> Result<LanguagePair, Error> {
        self.fetch_user_fields(credentials, "fromLanguage,learningLanguage")?
            .json::<LanguagePair>()
    }

    fn course_tree(&self, credentials: &Credentials) -> Result<Option<CourseTree>, Error> {
        let user = self
            .fetch_user_fields(credentials, "currentCourse")?
            .json::<UserCourse>()?;
        Ok(user.current_course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::stubs::StubTransport;
    use crate::domain::{ApiSettings, AuthToken, SkillId, UserId};

    fn setup() -> (Arc<StubTransport>, HttpLearnerProfile, Credentials) {
        let transport = Arc::new(StubTransport::new());
        let client = Arc::new(ApiClient::new(
            transport.clone(),
            ApiSettings {
                base_url: "http://api.test".to_string(),
                user_agent: "ua".to_string(),
            },
        ));
        let creds = Credentials {
            token: AuthToken::new("t"),
            user_id: UserId::new("42"),
        };
        (transport, HttpLearnerProfile::new(client), creds)
    }

    #[test]
    fn test_user_id_is_percent_encoded_in_path() {
        let (transport, profile, mut creds) = setup();
        creds.user_id = UserId::new("7/x?y#z");
        transport.push_response(200, r#"{"fromLanguage":"en","learningLanguage":"ko"}"#);
        profile.user_languages(&creds).unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/users/7%2Fx%3Fy%23z?fields=fromLanguage,learningLanguage"
        );
    }

    #[test]
    fn test_user_languages() {
        let (transport, profile, creds) = setup();
        transport.push_response(200, r#"{"fromLanguage":"en","learningLanguage":"ko"}"#);
        let pair = profile.user_languages(&creds).unwrap();
        assert_eq!(pair, LanguagePair::new("en", "ko"));
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/users/42?fields=fromLanguage,learningLanguage"
        );
    }

    #[test]
    fn test_user_languages_non_success_is_error() {
        let (transport, profile, creds) = setup();
        transport.push_response(401, "unauthorized");
        let err = profile.user_languages(&creds).unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_course_tree_extracts_skill() {
        let (transport, profile, creds) = setup();
        transport.push_response(
            200,
            r#"{"currentCourse":{"pathSectioned":[{"units":[{"levels":[{"pathLevelMetadata":{"skillId":"sk1"}}]}]}]}}"#,
        );
        let tree = profile.course_tree(&creds).unwrap().unwrap();
        assert_eq!(tree.first_skill_id(), Some(SkillId::new("sk1")));
    }

    #[test]
    fn test_course_tree_absent() {
        let (transport, profile, creds) = setup();
        transport.push_response(200, r#"{"currentCourse":null}"#);
        assert_eq!(profile.course_tree(&creds).unwrap(), None);
        transport.push_response(200, r#"{}"#);
        assert_eq!(profile.course_tree(&creds).unwrap(), None);
    }
}
