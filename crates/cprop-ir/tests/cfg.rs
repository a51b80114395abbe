use cprop_ir::*;

/// f(int p):
///   [0] x = 1
///   [1] if (x < p) goto L0
///   [2] y = 2
///   [3] goto L1
///   L0: [4] y = 3
///   L1: [5] return y
fn diamond() -> Cfg {
    let mut b = IrBuilder::new("f");
    let p = b.var().name("p").ty(PrimitiveType::Int).param(true).new();
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let y = b.var().name("y").ty(PrimitiveType::Int).new();
    let then_label = b.label();
    let join_label = b.label();

    b.push(Stmt::assign(&x, Exp::int(1)));
    b.push(Stmt::if_goto(
        BinaryExp::new(ConditionOp::Lt, x.clone(), p.clone()),
        then_label,
    ));
    b.push(Stmt::assign(&y, Exp::int(2)));
    b.push(Stmt::goto(join_label));
    b.bind(then_label).unwrap();
    b.push(Stmt::assign(&y, Exp::int(3)));
    b.bind(join_label).unwrap();
    b.push(Stmt::ret(Some(&y)));

    Cfg::build(b.build()).unwrap()
}

#[test]
fn test_cfg_display() {
    let cfg = diamond();
    insta::assert_snapshot!(cfg.to_string(), @r"
    entry -> [0]
    [0] x = 1 -> [1]
    [1] if (x < p) goto L0 -> [2] [4]
    [2] y = 2 -> [3]
    [3] goto L1 -> [5]
    [4] y = 3 -> [5]
    [5] return y -> exit
    exit
    ");
}

#[test]
fn test_cfg_edges() {
    let cfg = diamond();
    let branch = cfg.node_of(1).unwrap();
    let join = cfg.node_of(5).unwrap();

    assert_eq!(cfg.len(), 8);
    assert_eq!(cfg.succs(cfg.entry()).as_slice(), &[cfg.node_of(0).unwrap()]);
    assert_eq!(
        cfg.preds(join).as_slice(),
        &[cfg.node_of(3).unwrap(), cfg.node_of(4).unwrap()]
    );
    assert_eq!(
        cfg.edge_kinds(branch, cfg.node_of(4).unwrap()).as_slice(),
        &[EdgeKind::IfTrue]
    );
    assert_eq!(
        cfg.edge_kinds(branch, cfg.node_of(2).unwrap()).as_slice(),
        &[EdgeKind::IfFalse]
    );
    assert_eq!(cfg.preds(cfg.exit()).as_slice(), &[join]);
    assert!(cfg.succs(cfg.exit()).is_empty());
    assert_eq!(cfg.stmt(cfg.entry()), &Stmt::Nop);
}

#[test]
fn test_jump_to_self_and_past_the_end() {
    let mut b = IrBuilder::new("spin");
    let x = b.var().name("x").ty(PrimitiveType::Int).new();
    let head = b.label();
    let end = b.label();
    b.bind(head).unwrap();
    b.push(Stmt::if_goto(BinaryExp::new(ConditionOp::Eq, x.clone(), x.clone()), end));
    b.push(Stmt::goto(head));
    b.bind(end).unwrap();
    let cfg = Cfg::build(b.build()).unwrap();

    let test = cfg.node_of(0).unwrap();
    let back = cfg.node_of(1).unwrap();
    assert_eq!(cfg.succs(test).as_slice(), &[back, cfg.exit()]);
    assert_eq!(cfg.succs(back).as_slice(), &[test]);
    assert_eq!(cfg.preds(test).as_slice(), &[cfg.entry(), back]);
}

#[test]
fn test_empty_body_links_entry_to_exit() {
    let cfg = Cfg::build(IrBuilder::new("empty").build()).unwrap();
    assert_eq!(cfg.len(), 2);
    assert_eq!(cfg.succs(cfg.entry()).as_slice(), &[cfg.exit()]);
}

#[test]
fn test_unbound_jump_target_fails_to_build() {
    let mut b = IrBuilder::new("broken");
    let nowhere = b.label();
    b.push(Stmt::goto(nowhere));
    let err = Cfg::build(b.build()).unwrap_err();
    assert_eq!(err, IrError::UnboundLabel(nowhere));
    assert_eq!(err.to_string(), "label L0 is not bound to a statement");
}

#[test]
fn test_def_and_uses() {
    let mut b = IrBuilder::new("g");
    let a = b.var().name("a").ty(Type::array(PrimitiveType::Int)).new();
    let i = b.var().name("i").ty(PrimitiveType::Int).new();
    let v = b.var().name("v").ty(PrimitiveType::Int).new();

    let store = Stmt::store_array(&a, &i, &v);
    assert_eq!(store.def(), None);
    assert_eq!(store.uses(), vec![&v, &a, &i]);
    assert_eq!(store.to_string(), "a[i] = v");

    let add = Stmt::assign(&v, Exp::binary(ArithmeticOp::Add, &i, &i));
    assert_eq!(add.def(), Some(&v));
    assert_eq!(add.uses(), vec![&i, &i]);
}
