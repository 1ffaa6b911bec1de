//! Built-in reference dataset
//!
//! Thai and English aliases for common dishes, per typical single serving.
//! Registration order is match priority: composite dishes come before the
//! ingredient and category words they contain ("ข้าวผัด" before "ข้าว",
//! "papaya salad" before "salad").

use crate::models::Nutrition;

/// One built-in reference entry
pub struct DatasetEntry {
    pub name: &'static str,
    pub nutrition: Nutrition,
    pub aliases: &'static [&'static str],
}

const fn entry(
    name: &'static str,
    nutrition: Nutrition,
    aliases: &'static [&'static str],
) -> DatasetEntry {
    DatasetEntry { name, nutrition, aliases }
}

pub const BUILTIN: &[DatasetEntry] = &[
    // ------------------------------------------------------------------
    // Thai dishes
    // ------------------------------------------------------------------
    entry("pad thai", Nutrition::new(300.0, 12.0, 40.0, 12.0), &["pad thai", "ผัดไทย"]),
    entry("pad krapow", Nutrition::new(180.0, 20.0, 12.0, 8.0), &["pad krapow", "กะเพรา", "basil"]),
    entry("som tam", Nutrition::new(150.0, 5.0, 25.0, 4.0), &["papaya salad", "somtam", "ส้มตำ"]),
    entry("green curry", Nutrition::new(180.0, 8.0, 12.0, 12.0), &["green curry", "แกงเขียวหวาน"]),
    entry("massaman", Nutrition::new(220.0, 10.0, 15.0, 15.0), &["massaman", "มัสมั่น"]),
    entry("satay", Nutrition::new(200.0, 18.0, 8.0, 12.0), &["satay", "สะเต๊ะ"]),
    entry("tom yum", Nutrition::new(120.0, 6.0, 15.0, 4.0), &["tom yum", "ต้มยำ"]),
    // ------------------------------------------------------------------
    // Rice and noodle dishes
    // ------------------------------------------------------------------
    entry("fried rice", Nutrition::new(250.0, 6.0, 40.0, 8.0), &["fried rice", "ข้าวผัด"]),
    entry("steamed rice", Nutrition::new(130.0, 2.7, 28.0, 0.3), &["steamed rice"]),
    entry("ramen", Nutrition::new(380.0, 10.0, 55.0, 14.0), &["ramen"]),
    entry("pasta", Nutrition::new(200.0, 7.0, 42.0, 1.5), &["spaghetti", "pasta"]),
    // ------------------------------------------------------------------
    // Fast food
    // ------------------------------------------------------------------
    entry("french fries", Nutrition::new(312.0, 3.4, 41.0, 15.0), &["french fries", "fries"]),
    entry("hot dog", Nutrition::new(290.0, 11.0, 24.0, 17.0), &["hot dog"]),
    entry("burger", Nutrition::new(354.0, 20.0, 30.0, 17.0), &["burger", "เบอร์เกอร์"]),
    entry("pizza", Nutrition::new(285.0, 12.0, 36.0, 10.0), &["pizza", "พิซซ่า"]),
    entry("sandwich", Nutrition::new(300.0, 15.0, 35.0, 12.0), &["sandwich", "แซนด์วิช"]),
    entry("omelette", Nutrition::new(154.0, 11.0, 1.0, 12.0), &["omelette"]),
    entry("toast", Nutrition::new(79.0, 2.4, 15.0, 1.0), &["toast"]),
    // ------------------------------------------------------------------
    // Drinks
    // ------------------------------------------------------------------
    entry("milk tea", Nutrition::new(220.0, 4.0, 40.0, 6.0), &["milk tea", "ชานม"]),
    entry("smoothie", Nutrition::new(150.0, 3.0, 30.0, 2.0), &["smoothie"]),
    entry("juice", Nutrition::new(110.0, 1.0, 26.0, 0.3), &["juice"]),
    entry("coffee", Nutrition::new(2.0, 0.3, 0.0, 0.0), &["coffee", "กาแฟ"]),
    // ------------------------------------------------------------------
    // Desserts
    // ------------------------------------------------------------------
    entry("ice cream", Nutrition::new(207.0, 3.5, 24.0, 11.0), &["ice cream", "ไอศกรีม"]),
    entry("cake", Nutrition::new(350.0, 5.0, 50.0, 15.0), &["cake", "เค้ก"]),
    entry("cookie", Nutrition::new(140.0, 2.0, 18.0, 7.0), &["cookie"]),
    entry("donut", Nutrition::new(290.0, 4.0, 33.0, 16.0), &["donut", "โดนัท"]),
    // ------------------------------------------------------------------
    // Proteins
    // ------------------------------------------------------------------
    entry("chicken", Nutrition::new(165.0, 31.0, 0.0, 3.6), &["chicken", "ไก่"]),
    entry("pork", Nutrition::new(242.0, 27.0, 0.0, 14.0), &["pork", "หมู"]),
    entry("beef", Nutrition::new(250.0, 26.0, 0.0, 15.0), &["beef", "เนื้อ"]),
    entry("fish", Nutrition::new(140.0, 26.0, 0.0, 3.0), &["fish", "ปลา"]),
    entry("shrimp", Nutrition::new(99.0, 24.0, 0.2, 0.3), &["shrimp", "กุ้ง"]),
    entry("egg", Nutrition::new(155.0, 13.0, 1.1, 11.0), &["egg", "ไข่"]),
    // ------------------------------------------------------------------
    // Staples
    // ------------------------------------------------------------------
    entry("noodle", Nutrition::new(220.0, 8.0, 43.0, 1.3), &["noodle", "ก๋วยเตี๋ยว"]),
    entry("rice", Nutrition::new(200.0, 4.0, 45.0, 0.5), &["rice", "ข้าว"]),
    entry("bread", Nutrition::new(265.0, 9.0, 49.0, 3.2), &["bread", "ขนมปัง"]),
    entry("soup", Nutrition::new(120.0, 6.0, 15.0, 4.0), &["soup"]),
    // ------------------------------------------------------------------
    // Vegetables
    // ------------------------------------------------------------------
    entry("broccoli", Nutrition::new(55.0, 3.7, 11.0, 0.6), &["broccoli"]),
    entry("salad", Nutrition::new(100.0, 5.0, 10.0, 5.0), &["salad", "สลัด"]),
    entry("vegetable", Nutrition::new(50.0, 2.0, 10.0, 0.3), &["vegetable", "ผัก"]),
    // ------------------------------------------------------------------
    // Fruit
    // ------------------------------------------------------------------
    entry("banana", Nutrition::new(89.0, 1.1, 23.0, 0.3), &["banana", "กล้วย"]),
    entry("apple", Nutrition::new(52.0, 0.3, 14.0, 0.2), &["apple", "แอปเปิล"]),
    entry("orange", Nutrition::new(47.0, 0.9, 12.0, 0.1), &["orange"]),
    entry("mango", Nutrition::new(60.0, 0.8, 15.0, 0.4), &["mango", "มะม่วง"]),
    entry("fruit", Nutrition::new(60.0, 1.0, 15.0, 0.2), &["fruit", "ผลไม้"]),
];
