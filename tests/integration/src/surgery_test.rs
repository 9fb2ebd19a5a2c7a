//! End-to-end surgery test over the library crates
//!
//! Exercises the complete flow a migration script performed: load a
//! service file, excise methods by marker, splice in delegation stubs,
//! and write the result back atomically.

use std::fs;

use surgeon_fs::{read_text, write_atomic};
use surgeon_text::EditPlan;
use tempfile::TempDir;

/// A trimmed-down generated service file in the shape the scripts edited.
const SERVICE: &str = "\
class GeminiService {
  GeminiService({String? instanceId})
    : _instanceId = instanceId ?? _genId(),
      _dio = Dio(
        BaseOptions(connectTimeout: timeout),
      ) {
    _dio.interceptors.add(LogInterceptor());
  }

  /// Filters paragraphs already present in the script.
  Future<String> _filterDuplicateParagraphs(
    String existing,
    String addition,
  ) async {
    final result = await compute(_filterSync, {
      'existing': existing,
      'addition': addition,
    });
    return result;
  }

  String _normalizeRole(String role) {
    if (role.isEmpty) {
      return role;
    }
    return role.trim();
  }
}
";

const PLAN: &str = r#"
# Brace-balance would close inside the `{String? instanceId}` parameter
# set, so the constructor end is found by its last statement instead.
[[edit]]
name = "constructor"
start = ["GeminiService({String? instanceId})"]
end = { kind = "marker", markers = ["_dio.interceptors.add("], window = 3 }
replacement = """
  GeminiService({String? instanceId})
    : _instanceId = instanceId ?? _genId() {
    _llmClient = LlmClient(instanceId: _instanceId);
  }
"""

[[edit]]
name = "filter-duplicates"
start = ["Future<String> _filterDuplicateParagraphs("]
comment-window = { marker = "Filters paragraphs", lines = 3 }
end = { kind = "marker", markers = ["'addition': addition,"], window = 5 }
replacement = """
  Future<String> _filterDuplicateParagraphs(
    String existing,
    String addition,
  ) async =>
      TextFilter.filterDuplicateParagraphs(existing, addition);
"""

[[edit]]
name = "normalize-role"
start = ["String _normalizeRole(String role) {", { pattern = 'String _normalizeRole\(' }]
end = { kind = "brace-balance" }
replacement = "  String _normalizeRole(String role) => RolePatterns.normalize(role);"
"#;

#[test]
fn full_migration_pass_over_a_service_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("gemini_service.dart");
    write_atomic(&target, SERVICE.as_bytes()).unwrap();

    let batch = EditPlan::from_toml(PLAN).unwrap().into_batch().unwrap();
    let (original, _) = read_text(&target).unwrap();
    let outcome = batch.apply(&original);

    assert!(outcome.is_complete(), "missed: {:?}", outcome.missed);
    assert_eq!(outcome.applied.len(), 3);

    write_atomic(&target, outcome.buffer.as_bytes()).unwrap();
    let after = fs::read_to_string(&target).unwrap();

    // Constructor collapsed, interceptors gone.
    assert!(after.contains("_llmClient = LlmClient(instanceId: _instanceId);"));
    assert!(!after.contains("interceptors"));
    // Async filter replaced along with its doc comment.
    assert!(after.contains("TextFilter.filterDuplicateParagraphs"));
    assert!(!after.contains("compute(_filterSync"));
    assert!(!after.contains("Filters paragraphs"));
    // Role normalization delegated.
    assert!(after.contains("RolePatterns.normalize(role)"));
    assert!(!after.contains("role.trim()"));
    // The class itself survives.
    assert!(after.starts_with("class GeminiService {"));
    assert!(after.trim_end().ends_with('}'));
}

#[test]
fn rerun_on_migrated_file_changes_nothing() {
    let batch = EditPlan::from_toml(PLAN).unwrap().into_batch().unwrap();
    let migrated = batch.apply(SERVICE).buffer;

    let second = batch.apply(&migrated);
    assert!(second.is_noop());
    assert_eq!(second.buffer, migrated);
    assert_eq!(second.missed.len(), 3);
}

#[test]
fn partial_plan_reports_the_edit_that_missed() {
    let plan = format!(
        "{PLAN}\n[[edit]]\nname = \"ghost\"\nstart = [\"void _ghost(\"]\nend = {{ kind = \"brace-balance\" }}\nreplacement = \"x\"\n"
    );
    let batch = EditPlan::from_toml(&plan).unwrap().into_batch().unwrap();

    let outcome = batch.apply(SERVICE);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.applied.len(), 3);
    assert_eq!(outcome.missed.len(), 1);
    assert_eq!(outcome.missed[0].name, "ghost");
}

#[test]
fn repair_then_excise_pipeline() {
    // A file corrupted by a Latin-1 round trip still contains the ASCII
    // markers, so repair first, then excise.
    let corrupted: String = "class Service {\n  /// método auxiliar\n  String _role(String r) {\n    return r;\n  }\n}\n"
        .bytes()
        .map(char::from)
        .collect();

    let repaired = surgeon_fs::repair_mojibake(&corrupted);
    assert!(repaired.contains("método"));

    let plan = r#"
[[edit]]
name = "role"
start = ["String _role(String r) {"]
comment-window = { marker = "///", lines = 2 }
end = { kind = "brace-balance" }
replacement = "  String _role(String r) => RolePatterns.normalize(r);"
"#;
    let batch = EditPlan::from_toml(plan).unwrap().into_batch().unwrap();
    let outcome = batch.apply(&repaired);
    assert!(outcome.is_complete());
    assert!(!outcome.buffer.contains("método"));
    assert!(outcome.buffer.contains("RolePatterns.normalize(r)"));
}
