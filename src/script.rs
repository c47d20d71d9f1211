//! JSON command script interpreter (§4.15, §6 "JSON command script")
//!
//! A top-level JSON array of command objects scripts the cube-list algebra
//! through a small opcode set. Execution is two-phase: a first pass parses
//! every `expr` operand to collect variable names and size the problem, then
//! a second pass evaluates each command in order against a fixed bank of
//! nine cube-list slots (`0..=8`).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::cube_list::CubeList;
use crate::decision::is_subset;
use crate::error::{ExpressionParseError, ScriptError};
use crate::expression::{self, ast};
use crate::name_table::NameTable;
use crate::problem::Problem;
use crate::setops::intersection;
use crate::sharp::subtract;

/// Number of addressable slots (`slot` is documented as `0..8`, i.e. 9 slots
/// inclusive of both endpoints).
const NUM_SLOTS: usize = 9;

#[derive(Debug, Deserialize)]
struct RawCommand {
    cmd: String,
    #[serde(default)]
    slot: Option<i64>,
    #[serde(default)]
    bcl: Option<BclArg>,
    #[serde(default)]
    expr: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    label0: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BclArg {
    One(String),
    Many(Vec<String>),
}

impl BclArg {
    fn joined(&self) -> String {
        match self {
            BclArg::One(s) => s.clone(),
            BclArg::Many(lines) => lines.join("\n"),
        }
    }
}

/// Run a JSON command script against a fresh problem, returning the output
/// map keyed by each command's `label`/`label0`.
pub fn run(json: &str) -> Result<Value, ScriptError> {
    let commands: Vec<RawCommand> = match serde_json::from_str::<Value>(json)? {
        Value::Array(_) => serde_json::from_str(json)?,
        _ => return Err(ScriptError::NotAnArray),
    };

    // Phase one: collect every variable name mentioned by an `expr` operand,
    // and the widest bcl cube seen, so the problem can be sized once before
    // any command actually runs.
    let mut problem = Problem::new(0);
    let mut bcl_width = 0usize;
    let mut parsed_exprs: Vec<Option<expression::Expr>> = Vec::with_capacity(commands.len());
    for cmd in &commands {
        if cmd.bcl.is_some() && cmd.expr.is_some() {
            return Err(ScriptError::MissingOperand);
        }
        if let Some(expr_src) = &cmd.expr {
            let expr = expression::parse_expr(expr_src).map_err(|e| {
                ScriptError::Expression(annotate_expr_source(e, expr_src))
            })?;
            ast::collect_variables(&expr, problem.names_mut());
            parsed_exprs.push(Some(expr));
        } else {
            parsed_exprs.push(None);
            if let Some(bcl) = &cmd.bcl {
                let joined = bcl.joined();
                if let Some(first_line) = joined.lines().find(|l| !l.trim().is_empty()) {
                    let width = first_line.chars().filter(|c| !c.is_whitespace()).count();
                    bcl_width = bcl_width.max(width);
                }
            }
        }
    }
    problem.resize(bcl_width.max(problem.names().len()));
    let nvars = problem.nvars();

    // Phase two: evaluate.
    let mut slots: Vec<CubeList> = (0..NUM_SLOTS).map(|_| problem.new_list()).collect();
    let mut output = Map::new();

    for (cmd, parsed_expr) in commands.iter().zip(parsed_exprs.into_iter()) {
        let operand = resolve_operand(cmd, parsed_expr.as_ref(), problem.names(), nvars)?;
        let label = cmd.label.clone().or_else(|| cmd.label0.clone());

        match cmd.cmd.as_str() {
            "bcl2slot" => {
                let slot = slot_index(cmd)?;
                let operand = operand.ok_or(ScriptError::MissingOperand)?;
                slots[slot] = operand;
            }
            "show" => {
                let operand = operand.ok_or(ScriptError::MissingOperand)?;
                if let Some(label) = label {
                    output.insert(label, Value::String(operand.to_bcl()));
                }
            }
            "intersection0" => {
                let operand = operand.ok_or(ScriptError::MissingOperand)?;
                intersection(&mut slots[0], &operand)?;
                if let Some(label) = label {
                    output.insert(label, Value::Object(empty_flag(slots[0].is_empty())));
                }
            }
            "subtract0" => {
                let operand = operand.ok_or(ScriptError::MissingOperand)?;
                slots[0] = subtract(&slots[0], &operand)?;
                if let Some(label) = label {
                    output.insert(label, Value::Object(empty_flag(slots[0].is_empty())));
                }
            }
            "equal0" => {
                let operand = operand.ok_or(ScriptError::MissingOperand)?;
                let superset = is_subset(&operand, &slots[0])?;
                let subset = is_subset(&slots[0], &operand)?;
                if let Some(label) = label {
                    let mut m = Map::new();
                    m.insert("superset".to_string(), Value::Bool(superset));
                    m.insert("subset".to_string(), Value::Bool(subset));
                    output.insert(label, Value::Object(m));
                }
            }
            "exchange0" => {
                let slot = slot_index(cmd)?;
                slots.swap(0, slot);
            }
            "copy0" => {
                let slot = slot_index(cmd)?;
                let copy = slots[0].clone();
                slots[slot] = copy;
            }
            other => {
                log::warn!("script: unrecognized command {:?}", other);
                return Err(ScriptError::UnknownCommand {
                    cmd: Some(other.to_string()),
                })
            }
        }
    }

    Ok(Value::Object(output))
}

fn empty_flag(empty: bool) -> Map<String, Value> {
    let mut m = Map::new();
    m.insert("empty".to_string(), Value::Bool(empty));
    m
}

fn slot_index(cmd: &RawCommand) -> Result<usize, ScriptError> {
    let slot = cmd.slot.unwrap_or(0);
    if !(0..NUM_SLOTS as i64).contains(&slot) {
        return Err(ScriptError::SlotOutOfRange { slot });
    }
    Ok(slot as usize)
}

fn resolve_operand(
    cmd: &RawCommand,
    parsed_expr: Option<&expression::Expr>,
    names: &NameTable,
    nvars: usize,
) -> Result<Option<CubeList>, ScriptError> {
    if let Some(expr) = parsed_expr {
        let list = expression::lower(expr, names)?;
        return Ok(Some(list));
    }
    if let Some(bcl) = &cmd.bcl {
        let mut list = CubeList::new(nvars);
        list.append_from_string(&bcl.joined())?;
        return Ok(Some(list));
    }
    Ok(None)
}

fn annotate_expr_source(err: ExpressionParseError, _src: &str) -> ExpressionParseError {
    // The error already carries the offending source text; this hook exists
    // so a caller that wants per-command context (e.g. which command index
    // failed) has a single seam to add it without touching the parser.
    err
}
