//! Advisory duplicate-code check and the submit flow of the new-frame form.
//!
//! The server stays authoritative: a clean local verdict never prevents a
//! 409 from the create endpoint, which is reported the same way.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::aggregate::{Armazon, ArmazonDto, CodeTriple};
use super::validation::ArmazonForm;
use crate::shared::error::ApiError;
use crate::shared::validation::FieldErrors;

pub const VERIFY_FAILED_WARNING: &str =
    "No se pudo verificar duplicados. Por favor, confirme manualmente.";

/// Answer of `POST /api/armazones/verificar-duplicados`
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerificarDuplicadosResponse {
    #[serde(default)]
    pub es_duplicado: bool,
    #[serde(default)]
    pub armazon_existente: Option<CodeTriple>,
}

/// Outcome of the pre-submit check
#[derive(Debug, Clone, PartialEq)]
pub enum DuplicateCheck {
    Clear,
    /// Message naming the colliding codes
    Duplicate(String),
    /// Neither check could run; carries the warning to show
    Unverified(String),
}

/// Codes of `candidate` that collide with `existing`, labelled for display
pub fn colliding_codes(candidate: &CodeTriple, existing: &CodeTriple) -> Vec<String> {
    let pairs = [
        ("Código Patilla", &candidate.codigo_patilla, &existing.codigo_patilla),
        ("Código Interno", &candidate.codigo_interno, &existing.codigo_interno),
        ("Código Color", &candidate.codigo_color, &existing.codigo_color),
    ];
    pairs
        .iter()
        .filter(|(_, a, b)| !a.is_empty() && a.eq_ignore_ascii_case(b))
        .map(|(label, a, _)| format!("{label}: {}", a.to_uppercase()))
        .collect()
}

pub fn duplicate_message(candidate: &CodeTriple, existing: Option<&CodeTriple>) -> String {
    let named = match existing {
        Some(existing) => colliding_codes(candidate, existing),
        None => Vec::new(),
    };
    let named = if named.is_empty() {
        let c = candidate.upper();
        vec![format!(
            "{} / {} / {}",
            c.codigo_patilla, c.codigo_interno, c.codigo_color
        )]
    } else {
        named
    };
    format!(
        "Ya existe un armazón con códigos similares ({}). Por favor, utilice códigos únicos.",
        named.join(", ")
    )
}

/// First frame sharing any of the three codes (case-insensitive)
pub fn scan_local_duplicates<'a>(candidate: &CodeTriple, frames: &'a [Armazon]) -> Option<&'a Armazon> {
    let c = candidate.upper();
    frames.iter().find(|a| {
        a.codigo_patilla.eq_ignore_ascii_case(&c.codigo_patilla)
            || a.codigo_interno.eq_ignore_ascii_case(&c.codigo_interno)
            || a.codigo_color.eq_ignore_ascii_case(&c.codigo_color)
    })
}

/// HTTP side of the frame form
#[async_trait(?Send)]
pub trait ArmazonGateway {
    async fn verify_duplicates(&self, codes: &CodeTriple) -> Result<VerificarDuplicadosResponse, ApiError>;

    async fn list(&self) -> Result<Vec<Armazon>, ApiError>;

    async fn create(&self, dto: &ArmazonDto) -> Result<(), ApiError>;
}

/// Server check first, full-list scan when it fails
pub async fn check_duplicates<G: ArmazonGateway + ?Sized>(gateway: &G, codes: &CodeTriple) -> DuplicateCheck {
    let codes = codes.upper();
    match gateway.verify_duplicates(&codes).await {
        Ok(resp) if resp.es_duplicado => {
            DuplicateCheck::Duplicate(duplicate_message(&codes, resp.armazon_existente.as_ref()))
        }
        Ok(_) => DuplicateCheck::Clear,
        Err(e) => {
            log::warn!("verificar-duplicados failed, scanning list: {}", e);
            match gateway.list().await {
                Ok(frames) => match scan_local_duplicates(&codes, &frames) {
                    Some(found) => DuplicateCheck::Duplicate(duplicate_message(&codes, Some(&found.codes()))),
                    None => DuplicateCheck::Clear,
                },
                Err(e) => {
                    log::warn!("duplicate fallback failed: {}", e);
                    DuplicateCheck::Unverified(VERIFY_FAILED_WARNING.to_string())
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Revise los campos marcados")]
    Invalid(FieldErrors),

    /// Found by the pre-submit check; nothing was sent
    #[error("{0}")]
    Duplicate(String),

    /// Rejected by the create endpoint as a duplicate
    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmitOutcome {
    /// Set when the duplicate check could not run
    pub warning: Option<String>,
}

/// Maps a create failure to a conflict when the server reports a duplicate
pub fn classify_create_error(err: ApiError) -> SubmitError {
    match err {
        ApiError::Conflict(message) => SubmitError::Conflict(message),
        ApiError::Http { status: 409, message, .. } => SubmitError::Conflict(conflict_text(&message)),
        // The keyword may sit in the prefix that `message` drops
        ApiError::Http { ref message, ref body, .. } if mentions_duplicate(body) => {
            SubmitError::Conflict(conflict_text(message))
        }
        other => SubmitError::Api(other),
    }
}

fn mentions_duplicate(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("duplicado") || lower.contains("unique")
}

fn conflict_text(message: &str) -> String {
    if message.trim().is_empty() {
        "Ya existe un armazón con esos códigos".to_string()
    } else {
        format!("Ya existe un armazón con esos códigos: {}", message.trim())
    }
}

/// Validate, check duplicates, then create.
/// The create endpoint is never called for an invalid form or a duplicate.
pub async fn submit_new_armazon<G: ArmazonGateway + ?Sized>(
    gateway: &G,
    form: &ArmazonForm,
) -> Result<SubmitOutcome, SubmitError> {
    let dto = form.validate().map_err(SubmitError::Invalid)?;

    let mut outcome = SubmitOutcome::default();
    match check_duplicates(gateway, &dto.codes()).await {
        DuplicateCheck::Duplicate(message) => return Err(SubmitError::Duplicate(message)),
        DuplicateCheck::Unverified(warning) => outcome.warning = Some(warning),
        DuplicateCheck::Clear => {}
    }

    log::info!("creating armazon {}", dto.codigo_interno);
    gateway.create(&dto).await.map_err(classify_create_error)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeGateway {
        verify: Option<Result<VerificarDuplicadosResponse, ApiError>>,
        frames: Option<Vec<Armazon>>,
        create_result: Option<ApiError>,
        verify_calls: Cell<usize>,
        list_calls: Cell<usize>,
        created: RefCell<Vec<ArmazonDto>>,
    }

    #[async_trait(?Send)]
    impl ArmazonGateway for FakeGateway {
        async fn verify_duplicates(&self, _codes: &CodeTriple) -> Result<VerificarDuplicadosResponse, ApiError> {
            self.verify_calls.set(self.verify_calls.get() + 1);
            self.verify
                .clone()
                .unwrap_or_else(|| Err(ApiError::Network("offline".into())))
        }

        async fn list(&self) -> Result<Vec<Armazon>, ApiError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.frames
                .clone()
                .ok_or_else(|| ApiError::Network("offline".into()))
        }

        async fn create(&self, dto: &ArmazonDto) -> Result<(), ApiError> {
            self.created.borrow_mut().push(dto.clone());
            match &self.create_result {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn form(patilla: &str, interno: &str, color: &str) -> ArmazonForm {
        ArmazonForm {
            codigo_patilla: patilla.into(),
            codigo_interno: interno.into(),
            codigo_color: color.into(),
            descripcion: "Aviador".into(),
            tipo_armazon: "RECETA".into(),
            material: "METAL".into(),
            ubicacion: "VIDRIERA".into(),
            ..ArmazonForm::default()
        }
    }

    fn frame(patilla: &str, interno: &str, color: &str) -> Armazon {
        Armazon {
            id: 1,
            codigo_patilla: patilla.into(),
            codigo_interno: interno.into(),
            codigo_color: color.into(),
            descripcion: "Existente".into(),
            letra_color: None,
            tipo_armazon: "SOL".into(),
            material: "ACETATO".into(),
            ubicacion: "DEPOSITO".into(),
            cantidad: 1,
            cantidad_minima: 1,
            costo: 1.0,
            precio_venta: 2.0,
            activo: true,
        }
    }

    #[tokio::test]
    async fn test_fallback_finds_duplicate_and_blocks_create() {
        let gateway = FakeGateway {
            verify: Some(Err(ApiError::from_response(500, "boom"))),
            frames: Some(vec![frame("cp001", "X1", "Y1")]),
            ..Default::default()
        };
        let err = submit_new_armazon(&gateway, &form("CP001", "CI001", "CC001"))
            .await
            .unwrap_err();
        match err {
            SubmitError::Duplicate(message) => assert!(message.contains("CP001"), "{message}"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(gateway.list_calls.get(), 1);
        assert!(gateway.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_server_verdict_blocks_create() {
        let gateway = FakeGateway {
            verify: Some(Ok(VerificarDuplicadosResponse {
                es_duplicado: true,
                armazon_existente: Some(CodeTriple {
                    codigo_patilla: "OTRO".into(),
                    codigo_interno: "CI001".into(),
                    codigo_color: "OTRO".into(),
                }),
            })),
            ..Default::default()
        };
        let err = submit_new_armazon(&gateway, &form("CP001", "ci001", "CC001"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Duplicate(
                "Ya existe un armazón con códigos similares (Código Interno: CI001). Por favor, utilice códigos únicos."
                    .into()
            )
        );
        assert_eq!(gateway.list_calls.get(), 0);
        assert!(gateway.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_clear_check_creates_with_normalized_codes() {
        let gateway = FakeGateway {
            verify: Some(Ok(VerificarDuplicadosResponse::default())),
            ..Default::default()
        };
        let outcome = submit_new_armazon(&gateway, &form("cp 1", "ci1", "cc1")).await.unwrap();
        assert_eq!(outcome.warning, None);
        let created = gateway.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].codigo_patilla, "CP1");
    }

    #[tokio::test]
    async fn test_both_checks_failing_warns_but_submits() {
        let gateway = FakeGateway::default();
        let outcome = submit_new_armazon(&gateway, &form("A1", "B1", "C1")).await.unwrap();
        assert_eq!(outcome.warning.as_deref(), Some(VERIFY_FAILED_WARNING));
        assert_eq!(gateway.created.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_server_conflict_is_reported_as_duplicate() {
        let gateway = FakeGateway {
            verify: Some(Ok(VerificarDuplicadosResponse::default())),
            create_result: Some(ApiError::from_response(
                400,
                r#"{"error":"SequelizeUniqueConstraintError: unique violation"}"#,
            )),
            ..Default::default()
        };
        let err = submit_new_armazon(&gateway, &form("A1", "B1", "C1")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Conflict(_)));

        assert!(matches!(
            classify_create_error(ApiError::from_response(409, "")),
            SubmitError::Conflict(_)
        ));
        assert!(matches!(
            classify_create_error(ApiError::from_response(500, "otra cosa")),
            SubmitError::Api(_)
        ));
    }

    #[test]
    fn test_duplicate_keyword_before_colon_is_a_conflict() {
        let err = classify_create_error(ApiError::from_response(
            400,
            r#"{"error":"Registro duplicado: el armazon ya existe"}"#,
        ));
        assert_eq!(
            err,
            SubmitError::Conflict("Ya existe un armazón con esos códigos: el armazon ya existe".to_string())
        );

        let err = classify_create_error(ApiError::from_response(400, r#"{"error":"UNIQUE constraint: codigo"}"#));
        assert!(matches!(err, SubmitError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_calls() {
        let gateway = FakeGateway::default();
        let err = submit_new_armazon(&gateway, &ArmazonForm::default()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(gateway.verify_calls.get(), 0);
        assert!(gateway.created.borrow().is_empty());
    }

    #[test]
    fn test_scan_is_case_insensitive_or() {
        let frames = vec![frame("AA", "BB", "CC"), frame("DD", "EE", "FF")];
        let codes = CodeTriple {
            codigo_patilla: "zz".into(),
            codigo_interno: "zz".into(),
            codigo_color: "ff".into(),
        };
        assert_eq!(scan_local_duplicates(&codes, &frames).map(|a| a.codigo_patilla.as_str()), Some("DD"));
        let none = CodeTriple {
            codigo_patilla: "X".into(),
            codigo_interno: "Y".into(),
            codigo_color: "Z".into(),
        };
        assert!(scan_local_duplicates(&none, &frames).is_none());
    }
}
