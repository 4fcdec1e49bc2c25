//! Workspace-level integration tests for byteint live in `tests/`.
