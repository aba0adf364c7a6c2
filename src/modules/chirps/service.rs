use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use chirpy_core::AppError;
use chirpy_db::Store;

use crate::metrics::track_chirp_created;

use super::model::{Chirp, CreateChirpRequest, MAX_CHIRP_LENGTH};

const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const CENSORED: &str = "****";

/// Replaces every space-separated word matching a profane word (ignoring
/// case) with `****`. Words with punctuation attached are left alone.
pub fn censor_profanity(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if PROFANE_WORDS.contains(&lowered.as_str()) {
                CENSORED
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct ChirpService;

impl ChirpService {
    #[instrument(skip(store, dto), fields(user_id = %user_id))]
    pub async fn create_chirp(
        store: &dyn Store,
        user_id: Uuid,
        dto: CreateChirpRequest,
    ) -> Result<Chirp, AppError> {
        if dto.body.chars().count() > MAX_CHIRP_LENGTH {
            return Err(AppError::bad_request(anyhow!("Chirp is too long")));
        }

        let chirp = store
            .create_chirp(&censor_profanity(&dto.body), user_id)
            .await
            .map_err(AppError::internal)?;

        track_chirp_created();
        info!(chirp_id = %chirp.id, "chirp created");
        Ok(chirp)
    }

    #[instrument(skip(store))]
    pub async fn list_chirps(store: &dyn Store) -> Result<Vec<Chirp>, AppError> {
        store.list_chirps().await.map_err(AppError::internal)
    }

    #[instrument(skip(store))]
    pub async fn get_chirp(store: &dyn Store, id: Uuid) -> Result<Chirp, AppError> {
        store
            .get_chirp(id)
            .await
            .map_err(AppError::internal)?
            .ok_or_else(|| AppError::not_found(anyhow!("Chirp not found")))
    }

    /// Deletes chirp `id` if `user_id` wrote it.
    #[instrument(skip(store))]
    pub async fn delete_chirp(store: &dyn Store, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let chirp = Self::get_chirp(store, id).await?;
        if chirp.user_id != user_id {
            return Err(AppError::forbidden(anyhow!(
                "You can only delete your own chirps"
            )));
        }

        if !store.delete_chirp(id).await.map_err(AppError::internal)? {
            return Err(AppError::not_found(anyhow!("Chirp not found")));
        }

        info!(chirp_id = %id, "chirp deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_db::MemoryStore;

    #[test]
    fn test_censor_replaces_profane_words_case_insensitively() {
        assert_eq!(
            censor_profanity("I had something interesting for breakfast"),
            "I had something interesting for breakfast"
        );
        assert_eq!(
            censor_profanity("This is a kerfuffle opinion I need to share with the world"),
            "This is a **** opinion I need to share with the world"
        );
        assert_eq!(censor_profanity("Sharbert FORNAX kerFuffle"), "**** **** ****");
    }

    #[test]
    fn test_censor_leaves_punctuated_words() {
        assert_eq!(censor_profanity("Sharbert!"), "Sharbert!");
        assert_eq!(censor_profanity("fornax, again"), "fornax, again");
    }

    #[test]
    fn test_censor_keeps_spacing() {
        assert_eq!(censor_profanity("a  kerfuffle "), "a  **** ");
        assert_eq!(censor_profanity(""), "");
    }

    #[tokio::test]
    async fn test_create_rejects_long_body() {
        let store = MemoryStore::new();
        let user = store.create_user("a@b.com", "hash").await.unwrap();

        let dto = CreateChirpRequest {
            body: "x".repeat(MAX_CHIRP_LENGTH + 1),
        };
        let err = ChirpService::create_chirp(&store, user.id, dto)
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);

        let dto = CreateChirpRequest {
            body: "é".repeat(MAX_CHIRP_LENGTH),
        };
        assert!(ChirpService::create_chirp(&store, user.id, dto).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_requires_ownership() {
        let store = MemoryStore::new();
        let author = store.create_user("author@b.com", "hash").await.unwrap();
        let other = store.create_user("other@b.com", "hash").await.unwrap();

        let chirp = ChirpService::create_chirp(
            &store,
            author.id,
            CreateChirpRequest {
                body: "hello".to_string(),
            },
        )
        .await
        .unwrap();

        let err = ChirpService::delete_chirp(&store, chirp.id, other.id)
            .await
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);

        ChirpService::delete_chirp(&store, chirp.id, author.id)
            .await
            .unwrap();
        let err = ChirpService::get_chirp(&store, chirp.id).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }
}
