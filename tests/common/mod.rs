//! Shared fixtures for integration tests

/// Minimal valid OpenAPI 3.0 document with no security at all.
pub fn bare_v3_spec() -> &'static str {
    r#"{"openapi": "3.0.0", "paths": {}}"#
}

/// OpenAPI 3.0 document with one unsecured operation.
pub fn unsecured_operation_spec() -> &'static str {
    r#"openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
  contact:
    email: security@example.com
paths:
  /users:
    get:
      responses:
        '200':
          description: Success
"#
}

/// Fully hardened OpenAPI 3.0 document that triggers no rules.
pub fn clean_v3_spec() -> &'static str {
    r#"openapi: 3.0.0
info:
  title: Clean API
  version: 1.0.0
  contact:
    email: security@example.com
security:
  - bearerAuth: []
components:
  securitySchemes:
    bearerAuth:
      type: http
      scheme: bearer
servers:
  - url: https://api.example.com
paths:
  /items:
    get:
      responses:
        '200':
          description: Success
          headers:
            X-RateLimit-Limit:
              schema:
                type: integer
        '401':
          description: Unauthorized
        '403':
          description: Forbidden
        '429':
          description: Too many requests
"#
}

/// Swagger 2.0 document serving plain HTTP.
pub fn http_v2_spec() -> &'static str {
    r#"swagger: "2.0"
info:
  title: Legacy API
  version: 1.0.0
schemes:
  - http
securityDefinitions:
  api_key:
    type: apiKey
    name: X-Api-Key
    in: header
paths: {}
"#
}
