use dynamic_array::collections::contiguous::{DynamicArray, GrowthPolicy};

#[derive(Debug, Clone, Default)]
struct MyZST;

impl Drop for MyZST {
    fn drop(&mut self) {
        println!("Dropped MyZST");
    }
}

fn main() {
    println!("\n[DynamicArray]\n");

    let mut arr = DynamicArray::<u8>::new();
    println!("{:?}", arr);

    for i in 0..8 {
        arr.push(i);
        println!("{:?}", arr);
    }

    arr.resize(12);
    println!("{:?}", arr);

    let mut other = DynamicArray::from([100, 101, 102]);
    other.clone_from(&arr);
    println!("{:?}", other);

    arr.clone_from(&DynamicArray::from([1, 2, 3]));
    println!("{:?}", arr);

    println!("\n[GrowthPolicy]\n");

    let mut arr = DynamicArray::with_growth(GrowthPolicy::new(4, 3));
    for i in 0..13_u16 {
        arr.push(i);
    }
    println!("{}, cap: {}", arr, arr.cap());

    println!("\n[ZST]\n");

    let mut arr = DynamicArray::<MyZST>::with_len(3);
    arr.push(MyZST);
    println!("{:?}", arr);
    arr.pop_back();
    println!("{:?}", arr);
}
