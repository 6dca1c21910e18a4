use catalog_macros::value_object;

#[value_object]
struct Amount {
    value: i64,
}

#[value_object(debug = false)]
struct NonDebugVO(i32);

#[value_object]
enum Level {
    #[default]
    Low,
    High,
}

fn main() {
    // Debug 默认开启，应可格式化
    let _ = format!("{:?}", Amount { value: 0 });

    // 值对象以值判等
    let a = Amount::default();
    let b = a.clone();
    assert!(a == b);
    assert!(a != Amount { value: 1 });

    let _ = NonDebugVO(1) == NonDebugVO(1);

    let lv: Level = Default::default();
    assert!(lv == Level::Low);
    assert!(lv != Level::High);
}
