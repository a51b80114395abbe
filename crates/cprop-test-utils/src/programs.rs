//! Small procedures exercising straight-line code, joins and loops.
//!
//! Statement indices are part of each program's contract; tests look nodes
//! up with [`Cfg::node_of`].

use cprop_ir::{
    ArithmeticOp, BinaryExp, Cfg, ConditionOp, Exp, IrBuilder, PrimitiveType, Stmt, Type,
};

fn finish(b: IrBuilder) -> Cfg {
    Cfg::build(b.build()).expect("canned programs bind every label")
}

/// ```text
/// straight():
///   [0] x = 1
///   [1] y = 2
///   [2] z = x + y
///   [3] return z
/// ```
pub fn straight_line() -> Cfg {
    let mut b = IrBuilder::new("straight");
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let y = b.var().name("y").ty(PrimitiveType::Int).new();
    let z = b.var().name("z").ty(PrimitiveType::Int).new();
    b.push(Stmt::assign(&x, Exp::int(1)));
    b.push(Stmt::assign(&y, Exp::int(2)));
    b.push(Stmt::assign(&z, Exp::binary(ArithmeticOp::Add, &x, &y)));
    b.push(Stmt::ret(Some(&z)));
    finish(b)
}

/// ```text
/// branch(int p, int q):
///   [0] if (p < q) goto L0
///   [1] x = 1
///   [2] goto L1
/// L0:
///   [3] x = 2
/// L1:
///   [4] return x
/// ```
pub fn branch_merge() -> Cfg {
    let mut b = IrBuilder::new("branch");
    let p = b.var().name("p").ty(PrimitiveType::Int).param(true).new();
    let q = b.var().name("q").ty(PrimitiveType::Int).param(true).new();
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let else_label = b.label();
    let join_label = b.label();

    b.push(Stmt::if_goto(BinaryExp::new(ConditionOp::Lt, p, q), else_label));
    b.push(Stmt::assign(&x, Exp::int(1)));
    b.push(Stmt::goto(join_label));
    b.bind(else_label).expect("fresh label");
    b.push(Stmt::assign(&x, Exp::int(2)));
    b.bind(join_label).expect("fresh label");
    b.push(Stmt::ret(Some(&x)));
    finish(b)
}

/// ```text
/// count(int n):
///   [0] x = 0
///   [1] one = 1
/// L0:
///   [2] if (x >= n) goto L1
///   [3] x = x + one
///   [4] goto L0
/// L1:
///   [5] return x
/// ```
pub fn counting_loop() -> Cfg {
    let mut b = IrBuilder::new("count");
    let n = b.var().name("n").ty(PrimitiveType::Int).param(true).new();
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let one = b.var().name("one").ty(PrimitiveType::Int).new();
    let head = b.label();
    let done = b.label();

    b.push(Stmt::assign(&x, Exp::int(0)));
    b.push(Stmt::assign(&one, Exp::int(1)));
    b.bind(head).expect("fresh label");
    b.push(Stmt::if_goto(BinaryExp::new(ConditionOp::Ge, x.clone(), n), done));
    b.push(Stmt::assign(&x, Exp::binary(ArithmeticOp::Add, &x, &one)));
    b.push(Stmt::goto(head));
    b.bind(done).expect("fresh label");
    b.push(Stmt::ret(Some(&x)));
    finish(b)
}

/// ```text
/// params(int i, long l, java.lang.String s, boolean flag, char c, double d):
///   [0] return
/// ```
pub fn mixed_params() -> Cfg {
    let mut b = IrBuilder::new("params");
    let params: [(&str, Type); 6] = [
        ("i", PrimitiveType::Int.into()),
        ("l", PrimitiveType::Long.into()),
        ("s", Type::class("java.lang.String")),
        ("flag", PrimitiveType::Boolean.into()),
        ("c", PrimitiveType::Char.into()),
        ("d", PrimitiveType::Double.into()),
    ];
    for (name, ty) in params {
        let _ = b.var().name(name).ty(ty).param(true).new();
    }
    b.push(Stmt::ret(None));
    finish(b)
}
