use serde_json::{json, Value};

use crate::catalog::{french, LocalizationTable};
use crate::config::CoreConfig;
use crate::model::template::KNOWN_TEMPLATE_IDS;
use crate::services::{coverage, diff, fallback, fingerprint::fingerprint, locale_file, qa};

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_str<'a>(payload: &'a Value, field: &str) -> &'a str {
    payload.get(field).and_then(|v| v.as_str()).unwrap_or("")
}

/// Present and a string, even an empty one.
fn get_present_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(|v| v.as_str())
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn load_file(cfg: &CoreConfig, path: &str) -> Result<LocalizationTable, String> {
    locale_file::load(&cfg.resolve(path)).map_err(|e| e.to_string())
}

pub fn handle(input: &str, cfg: &CoreConfig) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    tracing::debug!(cmd = cmd_str, "request");

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "template-locales core alive" })),

        Command::TemplateLookup => {
            let template_id = match get_present_str(payload, "template_id") {
                Some(t) => t,
                None => return err(id, "payload.template_id is required"),
            };

            // a miss is an answer, not a failure: the UI picks its fallback
            match french().lookup(template_id) {
                Ok(hit) => ok(
                    id,
                    json!({
                        "found": true,
                        "template_id": template_id,
                        "name": hit.name,
                        "description": hit.description
                    }),
                ),
                Err(e) => {
                    tracing::debug!("{e}");
                    ok(id, json!({ "found": false, "template_id": template_id }))
                }
            }
        }

        Command::TemplateKeys => ok(id, json!({ "keys": french().keys() })),

        Command::TemplateExport => ok(
            id,
            json!({ "table": french(), "fingerprint": fingerprint(french()) }),
        ),

        Command::TemplateResolve => {
            let template_id = match get_present_str(payload, "template_id") {
                Some(t) => t,
                None => return err(id, "payload.template_id is required"),
            };

            let file = get_str(payload, "file");
            let extra = if file.is_empty() {
                None
            } else {
                match load_file(cfg, file) {
                    Ok(t) => Some(t),
                    Err(e) => return err(id, e),
                }
            };

            let mut chain: Vec<&LocalizationTable> = vec![french()];
            chain.extend(extra.as_ref());

            let resolved = fallback::resolve(template_id, &chain);
            ok(id, serde_json::to_value(resolved).unwrap_or(json!({})))
        }

        Command::TemplateCoverage => {
            let report = coverage::report(french(), &KNOWN_TEMPLATE_IDS);
            ok(id, serde_json::to_value(report).unwrap_or(json!({})))
        }

        Command::TemplateQa => {
            let source_file = get_str(payload, "source_file");
            let source = if source_file.is_empty() {
                None
            } else {
                match load_file(cfg, source_file) {
                    Ok(t) => Some(t),
                    Err(e) => return err(id, e),
                }
            };

            let issues = qa::run(french(), source.as_ref());
            ok(id, json!({ "issues": issues }))
        }

        Command::LocaleLoad => {
            let path = get_str(payload, "path");
            if path.is_empty() {
                return err(id, "payload.path is required");
            }

            match load_file(cfg, path) {
                Ok(table) => ok(
                    id,
                    json!({ "fingerprint": fingerprint(&table), "table": table }),
                ),
                Err(e) => err(id, e),
            }
        }

        Command::LocaleSave => {
            let path = get_str(payload, "path");
            if path.is_empty() {
                return err(id, "payload.path is required");
            }

            let table_val = payload.get("table").cloned().unwrap_or(Value::Null);
            if table_val.is_null() {
                return err(id, "payload.table is required");
            }

            // same checks as a file read from disk
            let table = match locale_file::parse(&table_val.to_string()) {
                Ok(t) => t,
                Err(e) => return err(id, format!("invalid payload.table: {e}")),
            };

            let full = cfg.resolve(path);
            match locale_file::save(&full, &table) {
                Ok(()) => ok(
                    id,
                    json!({
                        "path": full.to_string_lossy(),
                        "fingerprint": fingerprint(&table)
                    }),
                ),
                Err(e) => err(id, e.to_string()),
            }
        }

        Command::LocaleDiff => {
            let path = get_str(payload, "path");
            if path.is_empty() {
                return err(id, "payload.path is required");
            }

            match load_file(cfg, path) {
                Ok(other) => {
                    let d = diff::diff(french(), &other);
                    ok(id, serde_json::to_value(d).unwrap_or(json!({})))
                }
                Err(e) => err(id, e),
            }
        }

        Command::LocaleMerge => {
            let path = get_str(payload, "path");
            if path.is_empty() {
                return err(id, "payload.path is required");
            }

            // the file is the base, French entries override it
            match load_file(cfg, path) {
                Ok(base) => {
                    let merged = diff::merge(&base, french());
                    ok(
                        id,
                        json!({ "fingerprint": fingerprint(&merged), "table": merged }),
                    )
                }
                Err(e) => err(id, e),
            }
        }

        Command::Unknown => err(id, "unknown command"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(line: &str) -> Value {
        let cfg = CoreConfig::from_lookup(|_| None);
        serde_json::from_str(&handle(line, &cfg)).unwrap()
    }

    #[test]
    fn ping() {
        let r = call(r#"{"id":1,"cmd":"ping"}"#);
        assert_eq!(r["status"], "ok");
        assert_eq!(r["id"], 1);
    }

    #[test]
    fn invalid_json() {
        let r = call("{nope");
        assert_eq!(r["status"], "error");
        assert_eq!(r["message"], "invalid json");
    }

    #[test]
    fn unknown_command() {
        let r = call(r#"{"id":"a","cmd":"project.open"}"#);
        assert_eq!(r["message"], "unknown command");
        assert_eq!(r["id"], "a");
    }

    #[test]
    fn lookup_requires_id() {
        let r = call(r#"{"id":2,"cmd":"template.lookup","payload":{}}"#);
        assert_eq!(r["status"], "error");
        assert_eq!(r["message"], "payload.template_id is required");

        let r = call(r#"{"id":3,"cmd":"template.lookup","payload":{"template_id":7}}"#);
        assert_eq!(r["status"], "error");
    }
}
