/*!
# Arithmetic Calculator API

A small, stateless arithmetic HTTP API built in Rust.

## Overview

The service accepts an operation name and two decimal operands through any
of four equivalent request shapes and returns the computed result or a
structured error. All shapes are thin input adapters over one pure
evaluation function; no business logic differs between transports.

## Architecture

- **Evaluation Core** - The closed operation vocabulary (add, subtract,
  multiply, divide) and the pure `evaluate` function
- **Ingress Adapters** - Four request-parsing paths that extract
  (operation, a, b) from their transport encoding and delegate to the core
- **Error Handler** - Client input problems (missing field, non-numeric
  operand, unknown operation, division by zero) reported as 400 with a
  descriptive message; unexpected failures as 500 with a generic one

Every request is independent and side-effect-free. There is no stored
state, so no locking discipline and no shared mutable resource between
in-flight requests.

## Modules

- **eval**: Operation enum and the pure evaluation function
- **app**: Routing, request adapters, and the server loop
- **config**: TOML + environment configuration
- **error**: Startup and per-request error types

## REST API Endpoints

- `GET /` - Lists the request shapes with examples
- `GET /health` - Liveness probe
- `GET /api/calc?op={op}&a={a}&b={b}` - Everything as query parameters
- `GET /api/calc/{op}?a={a}&b={b}` - Operation as a path segment
- `GET /api/calc/{op}/{a}/{b}` - Everything as path segments
- `POST /api/calc` - JSON body `{"op": .., "a": .., "b": ..}`

Success responses are `{"operation", "a", "b", "result"}`; errors are
`{"error": <message>}`.
*/

// Re-export all modules so they appear in the documentation
pub mod app;
pub mod config;
pub mod error;
pub mod eval;

/// Re-export everything from these modules to make it easier to use
pub use app::*;
pub use config::*;
pub use error::*;
pub use eval::*;
