//! Registry behavior as seen by a Jaqal front end.

use qscout_gates::{
    GateArg, GateError, GateSignature, ParamKind, QubitId, STRETCH_PARAM, STRETCH_SUFFIX,
    all_gates, native_gates, two_qubit_gates,
};

#[test]
fn test_signatures_match_jaqal_tables() {
    let gates = native_gates().unwrap();

    let r = gates.get("R").unwrap();
    let params: Vec<_> = r
        .parameters()
        .iter()
        .map(|p| (p.name.as_str(), p.kind))
        .collect();
    assert_eq!(
        params,
        [
            ("q", ParamKind::Qubit),
            ("axis-angle", ParamKind::Float),
            ("rotation-angle", ParamKind::Float),
        ]
    );

    let ms = gates.get("MS").unwrap();
    assert_eq!(ms.num_qubits(), 2);
    assert_eq!(ms.parameters().len(), 4);

    let sx = gates.get("Sx").unwrap();
    assert_eq!(sx.parameters().len(), 1);
}

#[test]
fn test_idle_twins_mirror_parameters() {
    let gates = native_gates().unwrap();
    for active in gates.active() {
        let twin = gates.get(&format!("I_{}", active.name())).unwrap();
        assert!(twin.is_idle());
        assert_eq!(twin.parameters(), active.parameters());
    }
}

#[test]
fn test_stretch_does_not_touch_source_registry() {
    let base = native_gates().unwrap();
    let names_before: Vec<String> = base.names().map(str::to_string).collect();

    let mut stretched = base.stretched(STRETCH_SUFFIX).unwrap();
    stretched
        .insert(GateSignature::boundary("extra_marker"))
        .unwrap();

    let names_after: Vec<String> = base.names().map(str::to_string).collect();
    assert_eq!(names_before, names_after);
    assert!(!base.contains("extra_marker"));
    assert!(!base.contains("Sx_stretched"));
}

#[test]
fn test_every_active_gate_has_stretched_variant() {
    let base = native_gates().unwrap();
    let stretched = base.stretched(STRETCH_SUFFIX).unwrap();
    assert_eq!(stretched.len(), base.active().count());

    for gate in base.active() {
        let s = stretched
            .get(&format!("{}{STRETCH_SUFFIX}", gate.name()))
            .unwrap();
        let last = s.parameters().last().unwrap();
        assert_eq!(last.name, STRETCH_PARAM);
        assert_eq!(last.kind, ParamKind::Float);
        assert_eq!(s.parameters().len(), gate.parameters().len() + 1);
    }
}

#[test]
fn test_registries_do_not_overlap() {
    let native = native_gates().unwrap();
    let two = two_qubit_gates().unwrap();
    for name in two.names() {
        assert!(!native.contains(name), "{name} defined twice");
    }
    let all = all_gates().unwrap();
    assert_eq!(
        all.len(),
        native.len() + two.len() + native.active().count() + two.active().count()
    );
}

#[test]
fn test_unknown_gate() {
    let gates = native_gates().unwrap();
    let err = gates.ideal_unitary("Rw", &[GateArg::from(QubitId(0))]);
    assert_eq!(err.unwrap_err(), GateError::UnknownGate("Rw".to_string()));
}

#[test]
fn test_registry_serializes_in_table_order() {
    let gates = two_qubit_gates().unwrap();
    let json = serde_json::to_value(&gates).unwrap();
    let first = &json["gates"][0];
    assert_eq!(first["name"], "XX");
    assert_eq!(first["parameters"][2]["kind"], "Float");
}
