// Thu Oct 15 2026 - Alex

use crate::classes::{ClassDefinition, MethodDefinition};
use crate::pattern::{ScanResult, Window};
use crate::resolver::{MethodMap, PatchData};
use crate::signature::{Mismatch, Signature, SignatureComparator};
use rayon::prelude::*;

/// Drives the comparator over classes, methods and signatures.
///
/// The first method in class order, then method order, then signature order
/// to satisfy a signature wins it. The whole cross-product is always
/// visited; a signature resolved early is only skipped, never re-compared.
#[derive(Debug, Clone)]
pub struct MethodResolver {
    comparator: SignatureComparator,
    parallel: bool,
    threads: usize,
}

impl MethodResolver {
    pub fn new() -> Self {
        Self {
            comparator: SignatureComparator::new(),
            parallel: false,
            threads: 0,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Worker count for parallel runs, 0 uses rayon's global pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn resolve<'a>(&self, classes: &'a [ClassDefinition], signatures: &[Signature]) -> MethodMap<'a> {
        let map = if self.parallel {
            self.resolve_parallel(classes, signatures)
        } else {
            self.resolve_sequential(classes, signatures)
        };

        for name in map.unresolved(signatures) {
            log::error!("Failed to resolve signature {}", name);
        }

        map
    }

    /// First method of `class` satisfying `signature`. The window is always
    /// `Window::PLACEHOLDER`; callers of this lookup ignore it.
    pub fn resolve_in_class<'a>(&self, class: &'a ClassDefinition, signature: &Signature) -> Option<PatchData<'a>> {
        class
            .methods
            .iter()
            .find(|method| {
                let outcome = self.comparator.compare(method, signature);
                Self::trace_outcome(class, method, signature, &outcome);
                outcome.is_ok()
            })
            .map(|method| PatchData::new(class, method, ScanResult::Found(Window::PLACEHOLDER)))
    }

    fn resolve_sequential<'a>(&self, classes: &'a [ClassDefinition], signatures: &[Signature]) -> MethodMap<'a> {
        let mut map = MethodMap::new();

        for class in classes {
            for method in &class.methods {
                for signature in signatures {
                    if map.contains(signature.name()) {
                        Self::trace_skip(class, method, signature);
                        continue;
                    }
                    let outcome = self.comparator.compare(method, signature);
                    Self::record(&mut map, class, method, signature, outcome);
                }
            }
        }

        map
    }

    /// Comparisons run per class on the pool; the merge walks them in input
    /// order so the winner is the same one `resolve_sequential` picks.
    fn resolve_parallel<'a>(&self, classes: &'a [ClassDefinition], signatures: &[Signature]) -> MethodMap<'a> {
        let compare_all = || -> Vec<Vec<Vec<Result<ScanResult, Mismatch>>>> {
            classes
                .par_iter()
                .map(|class| {
                    class
                        .methods
                        .iter()
                        .map(|method| {
                            signatures
                                .iter()
                                .map(|signature| self.comparator.compare(method, signature))
                                .collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>()
                })
                .collect()
        };

        let outcomes = match self.build_pool() {
            Some(pool) => pool.install(compare_all),
            None => compare_all(),
        };

        let mut map = MethodMap::new();

        for (class, per_method) in classes.iter().zip(outcomes) {
            for (method, per_signature) in class.methods.iter().zip(per_method) {
                for (signature, outcome) in signatures.iter().zip(per_signature) {
                    if map.contains(signature.name()) {
                        Self::trace_skip(class, method, signature);
                        continue;
                    }
                    Self::record(&mut map, class, method, signature, outcome);
                }
            }
        }

        map
    }

    fn build_pool(&self) -> Option<rayon::ThreadPool> {
        if self.threads == 0 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new().num_threads(self.threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                log::warn!("Falling back to the global thread pool: {}", e);
                None
            }
        }
    }

    fn record<'a>(
        map: &mut MethodMap<'a>,
        class: &'a ClassDefinition,
        method: &'a MethodDefinition,
        signature: &Signature,
        outcome: Result<ScanResult, Mismatch>,
    ) {
        Self::trace_outcome(class, method, signature, &outcome);
        if let Ok(scan) = outcome {
            map.insert(signature.name(), PatchData::new(class, method, scan));
        }
    }

    fn trace_outcome(
        class: &ClassDefinition,
        method: &MethodDefinition,
        signature: &Signature,
        outcome: &Result<ScanResult, Mismatch>,
    ) {
        match outcome {
            Ok(scan) => log::trace!(
                "{}.{}{} matches {} (window {:?})",
                class.name,
                method.name,
                method.descriptor(),
                signature.name(),
                scan.window()
            ),
            Err(reason) => log::trace!(
                "{}.{}{} rejected for {}: {}",
                class.name,
                method.name,
                method.descriptor(),
                signature.name(),
                reason
            ),
        }
    }

    fn trace_skip(class: &ClassDefinition, method: &MethodDefinition, signature: &Signature) {
        log::trace!(
            "{} already resolved, skipping {}.{}",
            signature.name(),
            class.name,
            method.name
        );
    }
}

impl Default for MethodResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::opcodes::*;
    use crate::classes::{AccessFlags, Instruction, TypeDescriptor};
    use crate::utils::testing::{capture_logs, method, sample_classes};
    use log::Level;

    fn ty(desc: &str) -> TypeDescriptor {
        TypeDescriptor::parse(desc).unwrap()
    }

    fn located<'a>(map: &MethodMap<'a>, name: &str) -> Option<(String, String)> {
        map.get(name)
            .map(|data| (data.class.name.clone(), data.method.name.clone()))
    }

    #[test]
    fn test_resolves_static_zero_getter() {
        let classes = sample_classes();
        let signatures = [Signature::new("zero")
            .with_returns(ty("I"))
            .with_accessors(AccessFlags::PUBLIC | AccessFlags::STATIC)
            .with_opcodes(vec![ICONST_0, IRETURN])];

        let map = MethodResolver::new().resolve(&classes, &signatures);
        let data = map.get("zero").unwrap();

        assert_eq!(data.class.name, "a/b");
        assert_eq!(data.method.name, "c");
        assert_eq!(data.window(), Some(Window::new(1, 4)));
    }

    #[test]
    fn test_first_discovery_wins() {
        let classes = sample_classes();
        // Both "a/a.a" and "a/b.d" return objects; the earlier one wins even
        // though the later one also matches the opcode-free signature.
        let signatures = [Signature::new("object_getter").with_returns(ty("Ljava/lang/String;"))];

        let map = MethodResolver::new().resolve(&classes, &signatures);
        assert_eq!(located(&map, "object_getter"), Some(("a/a".to_string(), "a".to_string())));
    }

    #[test]
    fn test_resolved_signature_is_not_reconsidered() {
        let body = [Instruction::Op(ICONST_0), Instruction::Op(IRETURN)];
        let classes = [ClassDefinition::new("k")
            .with_method(method("loose", "()I", AccessFlags::empty(), &body))
            .with_method(method("exact", "()I", AccessFlags::PUBLIC | AccessFlags::STATIC, &body))];
        let signatures = [
            Signature::new("int_getter").with_returns(ty("I")),
            Signature::new("public_zero")
                .with_accessors(AccessFlags::PUBLIC | AccessFlags::STATIC)
                .with_opcodes(vec![ICONST_0, IRETURN]),
        ];

        let map = MethodResolver::new().resolve(&classes, &signatures);
        assert_eq!(map.get("int_getter").map(|d| d.method.name.as_str()), Some("loose"));
        assert_eq!(map.get("public_zero").map(|d| d.method.name.as_str()), Some("exact"));
        assert_eq!(map.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["int_getter", "public_zero"]);
    }

    #[test]
    fn test_unconstrained_takes_first_method() {
        let classes = sample_classes();
        let map = MethodResolver::new().resolve(&classes, &[Signature::new("anything")]);
        let data = map.get("anything").unwrap();
        assert_eq!(data.method.name, classes[0].methods[0].name);
        assert_eq!(data.scan, ScanResult::Unscanned);
    }

    #[test]
    fn test_unresolved_signature_does_not_block_others() {
        let classes = sample_classes();
        let signatures = [
            Signature::new("missing").with_opcodes(vec![ATHROW, ATHROW, ATHROW]),
            Signature::new("void_static").with_returns(ty("V")).with_accessors(AccessFlags::STATIC),
        ];

        let map = MethodResolver::new().resolve(&classes, &signatures);
        assert!(!map.contains("missing"));
        assert_eq!(located(&map, "void_static"), Some(("a/b".to_string(), "e".to_string())));
        assert_eq!(map.unresolved(&signatures), vec!["missing"]);
    }

    #[test]
    fn test_unresolved_signature_logged_once() {
        let classes = sample_classes();
        let signatures = [
            Signature::new("missing").with_opcodes(vec![ATHROW, ATHROW, ATHROW]),
            Signature::new("void_static").with_returns(ty("V")).with_accessors(AccessFlags::STATIC),
        ];

        let (map, records) = capture_logs(|| MethodResolver::new().resolve(&classes, &signatures));
        assert!(map.contains("void_static"));

        let errors: Vec<&str> = records
            .iter()
            .filter(|r| r.level == Level::Error)
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("missing"));
        assert!(!errors.iter().any(|m| m.contains("void_static")));
    }

    #[test]
    fn test_comparisons_and_skips_are_traced() {
        let classes = sample_classes();
        let signatures = [Signature::new("anything")];

        let (_, records) = capture_logs(|| MethodResolver::new().resolve(&classes, &signatures));
        let traces: Vec<&str> = records
            .iter()
            .filter(|r| r.level == Level::Trace)
            .map(|r| r.message.as_str())
            .collect();

        // One comparison for the first method, a skip for each of the other four.
        assert_eq!(traces.iter().filter(|m| m.contains("matches anything")).count(), 1);
        assert_eq!(
            traces
                .iter()
                .filter(|m| m.starts_with("anything already resolved, skipping"))
                .count(),
            4
        );
        assert!(traces.iter().any(|m| m.ends_with("skipping a/b.e")));
        assert!(records.iter().all(|r| r.level != Level::Error));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let classes = sample_classes();
        let signatures = [
            Signature::new("one").with_returns(ty("I")),
            Signature::new("two").with_parameters(vec![ty("[I")]),
            Signature::new("three").with_opcodes(vec![ALOAD_0, GETFIELD]),
        ];
        let resolver = MethodResolver::new();
        let first = resolver.resolve(&classes, &signatures);
        let second = resolver.resolve(&classes, &signatures);

        let collect = |map: &MethodMap<'_>| -> Vec<(String, String, Option<Window>)> {
            map.iter()
                .map(|(name, d)| (name.to_string(), d.method.name.clone(), d.window()))
                .collect()
        };
        assert_eq!(collect(&first), collect(&second));
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut classes = sample_classes();
        for i in 0..16 {
            classes.push(
                ClassDefinition::new(&format!("z/{}", i))
                    .with_method(method("x", "()I", AccessFlags::PUBLIC, &[Instruction::Op(ICONST_1), Instruction::Op(IRETURN)])),
            );
        }
        let signatures = [
            Signature::new("one").with_opcodes(vec![ICONST_1, IRETURN]),
            Signature::new("zero").with_opcodes(vec![ICONST_0, IRETURN]),
            Signature::new("any_int").with_returns(ty("I")),
            Signature::new("none").with_returns(ty("D")),
        ];

        let sequential = MethodResolver::new().resolve(&classes, &signatures);
        let parallel = MethodResolver::new()
            .with_parallel(true)
            .with_threads(4)
            .resolve(&classes, &signatures);

        let names = |map: &MethodMap<'_>| -> Vec<(String, String, String)> {
            map.iter()
                .map(|(n, d)| (n.to_string(), d.class.name.clone(), d.method.name.clone()))
                .collect()
        };
        assert_eq!(names(&sequential), names(&parallel));
        assert!(!parallel.contains("none"));
    }

    #[test]
    fn test_resolve_in_class_uses_placeholder_window() {
        let classes = sample_classes();
        let signature = Signature::new("zero").with_opcodes(vec![ICONST_0, IRETURN]);
        let resolver = MethodResolver::new();

        let data = resolver.resolve_in_class(&classes[1], &signature).unwrap();
        assert_eq!(data.method.name, "c");
        assert_eq!(data.window(), Some(Window::PLACEHOLDER));

        assert!(resolver.resolve_in_class(&classes[0], &signature).is_none());
    }
}
