// Thu Oct 15 2026 - Alex

//! Small fixtures shared by unit tests.

use crate::classes::opcodes::*;
use crate::classes::{AccessFlags, ClassDefinition, Instruction, MethodDefinition};
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use Instruction::{Label, LineNumber, Op};

pub fn method(name: &str, descriptor: &str, access: AccessFlags, body: &[Instruction]) -> MethodDefinition {
    MethodDefinition::from_descriptor(name, descriptor, access)
        .expect("fixture descriptor")
        .with_instructions(body.iter().copied())
}

/// Two obfuscated classes:
///
/// ```text
/// a/a  a ()Ljava/lang/String;  public         ALOAD_0 GETFIELD ARETURN
///      b ([I)V                 private        ALOAD_1 POP RETURN
/// a/b  c ()I                   public static  L0 ICONST_0 L1 IRETURN
///      d ()Ljava/lang/Object;  public         ALOAD_0 GETFIELD CHECKCAST ARETURN
///      e ()V                   static         LINE 1 RETURN
/// ```
pub fn sample_classes() -> Vec<ClassDefinition> {
    vec![
        ClassDefinition::new("a/a")
            .with_method(method(
                "a",
                "()Ljava/lang/String;",
                AccessFlags::PUBLIC,
                &[Op(ALOAD_0), Op(GETFIELD), Op(ARETURN)],
            ))
            .with_method(method("b", "([I)V", AccessFlags::PRIVATE, &[Op(ALOAD_1), Op(POP), Op(RETURN)])),
        ClassDefinition::new("a/b")
            .with_method(method(
                "c",
                "()I",
                AccessFlags::PUBLIC | AccessFlags::STATIC,
                &[Label(0), Op(ICONST_0), Label(1), Op(IRETURN)],
            ))
            .with_method(method(
                "d",
                "()Ljava/lang/Object;",
                AccessFlags::PUBLIC,
                &[Op(ALOAD_0), Op(GETFIELD), Op(CHECKCAST), Op(ARETURN)],
            ))
            .with_method(method("e", "()V", AccessFlags::STATIC, &[LineNumber(1), Op(RETURN)])),
    ]
}

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<CapturedRecord>>> = RefCell::new(None);
}

/// Keeps records per thread, so tests running side by side only see
/// what their own thread logged.
struct LogRecorder;

impl Log for LogRecorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        CAPTURED.with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push(CapturedRecord {
                    level: record.level(),
                    message: record.args().to_string(),
                });
            }
        });
    }

    fn flush(&self) {}
}

static RECORDER: LogRecorder = LogRecorder;

static INSTALLED: Lazy<bool> = Lazy::new(|| {
    let installed = log::set_logger(&RECORDER).is_ok();
    if installed {
        log::set_max_level(LevelFilter::Trace);
    }
    installed
});

/// Runs `f` and returns every record it logged on the current thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedRecord>) {
    assert!(*INSTALLED, "another logger is already installed");
    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    let result = f();
    let records = CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default());
    (result, records)
}
