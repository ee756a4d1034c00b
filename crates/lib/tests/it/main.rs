/*! Integration tests for nested-traversal.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - node: Tests for the Node wrapper (navigation, set, iteration, merge)
 * - value: Tests for the Value type and its serde conversions
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nested_traversal=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod node;
mod value;
