//! NameSilo reply code mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::ReplyDecoder;

/// Maps NameSilo reply codes onto [`ProviderError`].
///
/// Reference: <https://www.namesilo.com/api-reference#reply-codes>
impl ProviderErrorMapper for ReplyDecoder {
    fn provider_name(&self) -> &'static str {
        "namesilo"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code {
            // ============ Authentication ============
            // 109 no key, 110 invalid key, 111 invalid user
            109..=111 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                reply_code: Some(raw.code),
                raw_message: raw.detail,
            },

            // ============ Permission denied ============
            // 112 sub-account, 113 IP not allowed, 120 key must be passed as GET
            112 | 113 | 120 => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                operation: context.operation,
                reply_code: raw.code,
                raw_message: raw.detail,
            },

            // ============ Invalid parameter ============
            108 => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.operation,
                reply_code: Some(raw.code),
                detail: raw.detail,
            },
            114 => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "domain".to_string(),
                reply_code: Some(raw.code),
                detail: raw.detail,
            },

            // ============ Domain not active / not owned ============
            200 => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                operation: context.operation,
                domain: context.domain,
                host: context.host,
                reply_code: raw.code,
                raw_message: raw.detail,
            },

            // ============ Everything else (280 DNS modification error, 201, ...) ============
            _ => self.registrar_error(raw, context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ErrorContext {
        ErrorContext::new("dnsAddRecord", "example.com", "www")
    }

    #[test]
    fn auth_codes_map_to_invalid_credentials() {
        for code in [109, 110, 111] {
            let err = ReplyDecoder.map_error(RawApiError::new(code, "Invalid API Key"), ctx());
            assert_eq!(err.reply_code(), Some(code));
            assert!(
                matches!(err, ProviderError::InvalidCredentials { .. }),
                "expected InvalidCredentials for code {code}, got {err:?}"
            );
        }
    }

    #[test]
    fn permission_codes_map_to_permission_denied() {
        for code in [112, 113, 120] {
            let err = ReplyDecoder.map_error(RawApiError::new(code, "denied"), ctx());
            assert_eq!(err.reply_code(), Some(code));
            assert!(
                matches!(err, ProviderError::PermissionDenied { ref operation, .. } if operation == "dnsAddRecord"),
                "expected PermissionDenied for code {code}, got {err:?}"
            );
        }
    }

    #[test]
    fn missing_parameters_name_the_operation() {
        let err = ReplyDecoder.map_error(RawApiError::new(108, "missing rrvalue"), ctx());
        assert!(
            matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "dnsAddRecord"),
            "expected InvalidParameter, got {err:?}"
        );
    }

    #[test]
    fn invalid_domain_syntax() {
        let err = ReplyDecoder.map_error(RawApiError::new(114, "Invalid Domain Syntax"), ctx());
        assert!(
            matches!(err, ProviderError::InvalidParameter { ref param, .. } if param == "domain"),
            "expected InvalidParameter(domain), got {err:?}"
        );
    }

    #[test]
    fn inactive_domain_maps_to_domain_not_found() {
        let err = ReplyDecoder.map_error(RawApiError::new(200, "Domain is not active"), ctx());
        match err {
            ProviderError::DomainNotFound {
                operation,
                domain,
                host,
                reply_code,
                ..
            } => {
                assert_eq!(operation, "dnsAddRecord");
                assert_eq!(domain, "example.com");
                assert_eq!(host, "www");
                assert_eq!(reply_code, 200);
            }
            other => panic!("expected DomainNotFound, got {other:?}"),
        }
    }

    #[test]
    fn unmapped_code_keeps_full_context() {
        let err = ReplyDecoder.map_error(RawApiError::new(280, "DNS modification error"), ctx());
        match err {
            ProviderError::Registrar {
                operation,
                domain,
                host,
                reply_code,
                detail,
                ..
            } => {
                assert_eq!(operation, "dnsAddRecord");
                assert_eq!(domain, "example.com");
                assert_eq!(host, "www");
                assert_eq!(reply_code, 280);
                assert_eq!(detail, "DNS modification error");
            }
            other => panic!("expected Registrar, got {other:?}"),
        }
    }
}
