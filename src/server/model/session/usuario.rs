use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USUARIO_ID_KEY: &str = "agromano:usuario:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUsuarioId(pub String);

impl SessionUsuarioId {
    /// Insert usuario ID into session
    pub async fn insert(session: &Session, usuario_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USUARIO_ID_KEY, SessionUsuarioId(usuario_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get usuario ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUsuarioId>(SESSION_USUARIO_ID_KEY)
            .await?
            .map(|SessionUsuarioId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session usuario id: {}", e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    mod session_insert_usuario_id_tests {
        use agromano_test_utils::prelude::*;

        use crate::server::model::session::usuario::SessionUsuarioId;

        #[tokio::test]
        /// Expect success when inserting valid usuario ID into session
        async fn test_insert_session_usuario_id_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let usuario_id = 1;
            let result = SessionUsuarioId::insert(&test.session, usuario_id).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod session_get_usuario_id_tests {
        use agromano_test_utils::prelude::*;

        use crate::server::model::session::usuario::{SessionUsuarioId, SESSION_USUARIO_ID_KEY};

        #[tokio::test]
        /// Expect Some when usuario ID is present in session
        async fn test_get_session_usuario_id_some() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let usuario_id = 1;
            SessionUsuarioId::insert(&test.session, usuario_id)
                .await
                .unwrap();

            let result = SessionUsuarioId::get(&test.session).await;

            assert!(result.is_ok());
            let usuario_id_opt = result.unwrap();

            assert!(usuario_id_opt.is_some());
            assert_eq!(usuario_id_opt.unwrap(), usuario_id);

            Ok(())
        }

        #[tokio::test]
        /// Expect None when no usuario ID is present in session
        async fn test_get_session_usuario_id_none() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUsuarioId::get(&test.session).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }

        #[tokio::test]
        /// Expect parse error when usuario ID inserted into session is not an i32
        async fn test_get_session_usuario_id_parse_error() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            // Insert a usuario ID string which will fail i32 parse
            let usuario_id = "invalid_id";
            test.session
                .insert(SESSION_USUARIO_ID_KEY, SessionUsuarioId(usuario_id.to_string()))
                .await?;

            let result = SessionUsuarioId::get(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
