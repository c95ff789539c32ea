use serde::Deserialize;

use crate::server::{config::Config, error::chat::ChatError};

/// Fixed system prompt describing the Agromano domain model. The assistant
/// answers in the application's language and is told to keep replies short.
static SYSTEM_PROMPT: &str = "\
Eres un asistente virtual para la aplicación Agromano.
La app ayuda a ganaderos a gestionar su información:
- Titulares: datos personales (nombre, NIF, domicilio, provincia, código postal y teléfono) de quien dirige la explotación.
- Explotaciones: lugares donde se crían animales. Requiere nombre, dirección, código REGA, especies, coordenadas, etc.
- Animales: identificación, especie y estado (vivo, muerto...), fecha de nacimiento y fecha de alta para seguir su historial.
- Alimentaciones: registro de fecha, tipo (pienso, forraje...), factura y cantidad.
- Medicamentos: guardas la fecha, el nombre, la receta y factura.
- Movimientos: entradas o salidas de animales con fecha, motivo y procedencia/destino.
- Parcelas: campos con coordenadas y extensión.
- Inspecciones: revisiones oficiales o no, con fecha, tipo y número de acta.
- Incidencias: problemas o cambios en un animal (registro de fecha, descripción), también puede contener código anterior y actual si se trata de una reidentificación.
- Un usuario puede tener varios titulares, un titular varias explotaciones, una explotación puede tener varias parcelas, alimentaciones, medicamentos, inspecciones, vacunas y animales, a su vez, los animales pueden tener movimientos e incidencias.

Puedes guiar al usuario sobre qué datos rellenar en cada formulario o cómo navegar por la aplicación teniendo en cuenta las relaciones de las entidades.
Si el usuario pregunta algo que no figure aquí, sugiere contactar con soporte, y recuerda que debes proporcionar respuestas relativamente cortas, de no más de tres líneas.";

/// Thin client for a Generative Language `generateContent` endpoint.
///
/// The base URL is injectable so tests can point it at a local mock server.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl ChatClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.genai_api_url, &config.genai_api_key, &config.genai_model)
    }

    /// Sends the domain prompt plus the user message and returns the first
    /// candidate's text.
    pub async fn generate(&self, message: &str) -> Result<String, ChatError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let prompt = format!("{}\n\nUsuario: {}\n", SYSTEM_PROMPT, message);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: GenerateContentResponse = response.json().await?;

        completion
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(ChatError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use crate::server::{error::chat::ChatError, service::chatbot::ChatClient};

    #[tokio::test]
    /// Expect the first candidate's text to be returned
    async fn test_generate_returns_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test_key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"Registra primero el titular."}]}}]}"#,
            )
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), "test_key", "gemini-2.0-flash");
        let result = client.generate("¿Cómo doy de alta un animal?").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "Registra primero el titular.");
    }

    #[tokio::test]
    /// Expect EmptyResponse when the completion has no candidates
    async fn test_generate_empty_candidates() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), "test_key", "gemini-2.0-flash");
        let result = client.generate("hola").await;

        assert!(matches!(result, Err(ChatError::EmptyResponse)));
    }

    #[tokio::test]
    /// Expect a request error when the upstream responds with a 500
    async fn test_generate_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = ChatClient::new(&server.url(), "test_key", "gemini-2.0-flash");
        let result = client.generate("hola").await;

        assert!(matches!(result, Err(ChatError::Request(_))));
    }
}
