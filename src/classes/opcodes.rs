// Thu Oct 15 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const NOP: u8 = 0;
pub const ACONST_NULL: u8 = 1;
pub const ICONST_0: u8 = 3;
pub const ICONST_1: u8 = 4;
pub const ILOAD_0: u8 = 26;
pub const ILOAD_1: u8 = 27;
pub const ALOAD_0: u8 = 42;
pub const ALOAD_1: u8 = 43;
pub const ASTORE_1: u8 = 76;
pub const POP: u8 = 87;
pub const DUP: u8 = 89;
pub const IADD: u8 = 96;
pub const ISUB: u8 = 100;
pub const IFEQ: u8 = 153;
pub const IFNE: u8 = 154;
pub const GOTO: u8 = 167;
pub const IRETURN: u8 = 172;
pub const ARETURN: u8 = 176;
pub const RETURN: u8 = 177;
pub const GETSTATIC: u8 = 178;
pub const GETFIELD: u8 = 180;
pub const PUTFIELD: u8 = 181;
pub const INVOKEVIRTUAL: u8 = 182;
pub const INVOKESPECIAL: u8 = 183;
pub const INVOKESTATIC: u8 = 184;
pub const NEW: u8 = 187;
pub const ATHROW: u8 = 191;
pub const CHECKCAST: u8 = 192;

const MNEMONICS: [&str; 202] = [
    "NOP", "ACONST_NULL", "ICONST_M1", "ICONST_0", "ICONST_1", "ICONST_2",
    "ICONST_3", "ICONST_4", "ICONST_5", "LCONST_0", "LCONST_1", "FCONST_0",
    "FCONST_1", "FCONST_2", "DCONST_0", "DCONST_1", "BIPUSH", "SIPUSH",
    "LDC", "LDC_W", "LDC2_W", "ILOAD", "LLOAD", "FLOAD",
    "DLOAD", "ALOAD", "ILOAD_0", "ILOAD_1", "ILOAD_2", "ILOAD_3",
    "LLOAD_0", "LLOAD_1", "LLOAD_2", "LLOAD_3", "FLOAD_0", "FLOAD_1",
    "FLOAD_2", "FLOAD_3", "DLOAD_0", "DLOAD_1", "DLOAD_2", "DLOAD_3",
    "ALOAD_0", "ALOAD_1", "ALOAD_2", "ALOAD_3", "IALOAD", "LALOAD",
    "FALOAD", "DALOAD", "AALOAD", "BALOAD", "CALOAD", "SALOAD",
    "ISTORE", "LSTORE", "FSTORE", "DSTORE", "ASTORE", "ISTORE_0",
    "ISTORE_1", "ISTORE_2", "ISTORE_3", "LSTORE_0", "LSTORE_1", "LSTORE_2",
    "LSTORE_3", "FSTORE_0", "FSTORE_1", "FSTORE_2", "FSTORE_3", "DSTORE_0",
    "DSTORE_1", "DSTORE_2", "DSTORE_3", "ASTORE_0", "ASTORE_1", "ASTORE_2",
    "ASTORE_3", "IASTORE", "LASTORE", "FASTORE", "DASTORE", "AASTORE",
    "BASTORE", "CASTORE", "SASTORE", "POP", "POP2", "DUP",
    "DUP_X1", "DUP_X2", "DUP2", "DUP2_X1", "DUP2_X2", "SWAP",
    "IADD", "LADD", "FADD", "DADD", "ISUB", "LSUB",
    "FSUB", "DSUB", "IMUL", "LMUL", "FMUL", "DMUL",
    "IDIV", "LDIV", "FDIV", "DDIV", "IREM", "LREM",
    "FREM", "DREM", "INEG", "LNEG", "FNEG", "DNEG",
    "ISHL", "LSHL", "ISHR", "LSHR", "IUSHR", "LUSHR",
    "IAND", "LAND", "IOR", "LOR", "IXOR", "LXOR",
    "IINC", "I2L", "I2F", "I2D", "L2I", "L2F",
    "L2D", "F2I", "F2L", "F2D", "D2I", "D2L",
    "D2F", "I2B", "I2C", "I2S", "LCMP", "FCMPL",
    "FCMPG", "DCMPL", "DCMPG", "IFEQ", "IFNE", "IFLT",
    "IFGE", "IFGT", "IFLE", "IF_ICMPEQ", "IF_ICMPNE", "IF_ICMPLT",
    "IF_ICMPGE", "IF_ICMPGT", "IF_ICMPLE", "IF_ACMPEQ", "IF_ACMPNE", "GOTO",
    "JSR", "RET", "TABLESWITCH", "LOOKUPSWITCH", "IRETURN", "LRETURN",
    "FRETURN", "DRETURN", "ARETURN", "RETURN", "GETSTATIC", "PUTSTATIC",
    "GETFIELD", "PUTFIELD", "INVOKEVIRTUAL", "INVOKESPECIAL", "INVOKESTATIC", "INVOKEINTERFACE",
    "INVOKEDYNAMIC", "NEW", "NEWARRAY", "ANEWARRAY", "ARRAYLENGTH", "ATHROW",
    "CHECKCAST", "INSTANCEOF", "MONITORENTER", "MONITOREXIT", "WIDE", "MULTIANEWARRAY",
    "IFNULL", "IFNONNULL", "GOTO_W", "JSR_W",
];

static BY_NAME: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    MNEMONICS
        .iter()
        .enumerate()
        .map(|(opcode, name)| (*name, opcode as u8))
        .collect()
});

pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    MNEMONICS.get(opcode as usize).copied()
}

/// Case-insensitive mnemonic lookup.
pub fn opcode(name: &str) -> Option<u8> {
    BY_NAME.get(name.trim().to_ascii_uppercase().as_str()).copied()
}

pub fn all() -> impl Iterator<Item = (u8, &'static str)> {
    MNEMONICS.iter().enumerate().map(|(opcode, name)| (opcode as u8, *name))
}
