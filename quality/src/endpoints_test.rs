use super::*;

#[test]
fn read_routes_match_backend_paths() {
    assert_eq!(auth_me(), "/auth/me/");
    assert_eq!(list(), "/calidad/");
    assert_eq!(by_hd(9001), "/calidad/vehiculo/9001/");
    assert_eq!(item(7), "/calidad/item/7/");
    assert_eq!(previous(9001), "/calidad/vehiculo-previo/9001/");
    assert_eq!(comments(501), "/calidad/comentarios/501/");
}

#[test]
fn write_routes_match_backend_paths() {
    assert_eq!(create_comment(), "/calidad/comentarios/");
    assert_eq!(start(7), "/calidad/7/iniciar/");
    assert_eq!(finalize(7), "/calidad/7/finalizar/");
}

#[test]
fn join_tolerates_trailing_slash_on_base() {
    assert_eq!(join("http://api.local/v1/", "/calidad/"), "http://api.local/v1/calidad/");
    assert_eq!(join("http://api.local/v1", "/calidad/"), "http://api.local/v1/calidad/");
}

#[test]
fn join_with_empty_base_stays_relative() {
    assert_eq!(join("", "/calidad/item/1/"), "/calidad/item/1/");
}
