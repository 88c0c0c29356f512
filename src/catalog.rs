use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// One supported city or county. The table is fixed configuration data,
/// loaded once and never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub province: &'static str,
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const PROVINCE: &str = "江西省";

// (id, city, latitude, longitude) — ids are lowercase and unique.
const CATALOG: &[(&str, &str, f64, f64)] = &[
    ("nanchang", "南昌市", 28.682, 115.858),
    ("nanchang_donghu", "东湖区", 28.691, 115.899),
    ("nanchang_xihu", "西湖区", 28.656, 115.877),
    ("nanchang_qingyunpu", "青云谱区", 28.626, 115.915),
    ("nanchang_honggutan", "红谷滩区", 28.705, 115.823),
    ("nanchang_qingshanhu", "青山湖区", 28.704, 115.959),
    ("nanchang_xinjian", "新建区", 28.872, 115.820),
    ("nanchang_nanchangxian", "南昌县", 28.542, 115.942),
    ("nanchang_anyi", "安义县", 28.837, 115.553),
    ("nanchang_jinxian", "进贤县", 28.365, 116.268),
    ("jingdezhen", "景德镇市", 29.268, 117.201),
    ("jingdezhen_changjiang", "昌江区", 29.267, 117.205),
    ("jingdezhen_zhushan", "珠山区", 29.303, 117.214),
    ("jingdezhen_fuliang", "浮梁县", 29.711, 117.214),
    ("jingdezhen_leping", "乐平市", 28.979, 117.129),
    ("pingxiang", "萍乡市", 27.628, 113.854),
    ("pingxiang_anyuan", "安源区", 27.625, 113.883),
    ("pingxiang_xiangdong", "湘东区", 27.639, 113.732),
    ("pingxiang_lianhua", "莲花县", 27.128, 113.959),
    ("pingxiang_shangli", "上栗县", 27.877, 113.795),
    ("pingxiang_luxi", "芦溪县", 27.628, 114.041),
    ("jiujiang", "九江市", 29.707, 116.002),
    ("jiujiang_lianxi", "濂溪区", 29.672, 116.007),
    ("jiujiang_xunyang", "浔阳区", 29.734, 115.988),
    ("jiujiang_chaishang", "柴桑区", 29.608, 115.915),
    ("jiujiang_wuning", "武宁县", 29.267, 115.103),
    ("jiujiang_xiushui", "修水县", 29.024, 114.573),
    ("jiujiang_yongxiu", "永修县", 29.019, 115.823),
    ("jiujiang_dean", "德安县", 29.327, 115.762),
    ("jiujiang_duchang", "都昌县", 29.274, 116.189),
    ("jiujiang_hukou", "湖口县", 29.738, 116.244),
    ("jiujiang_pengze", "彭泽县", 29.896, 116.548),
    ("jiujiang_ruichang", "瑞昌市", 29.676, 115.674),
    ("jiujiang_gongqing", "共青城市", 29.248, 115.805),
    ("jiujiang_lushan", "庐山市", 29.456, 116.045),
    ("xinyu", "新余市", 27.817, 114.917),
    ("xinyu_yushui", "渝水区", 27.801, 114.938),
    ("xinyu_fenyi", "分宜县", 27.813, 114.668),
    ("yingtan", "鹰潭市", 28.241, 117.071),
    ("yingtan_yuehu", "月湖区", 28.239, 117.034),
    ("yingtan_yujiang", "余江区", 28.207, 116.837),
    ("yingtan_guixi", "贵溪市", 28.292, 117.214),
    ("ganzhou", "赣州市", 25.831, 114.940),
    ("ganzhou_zhanggong", "章贡区", 25.856, 114.938),
    ("ganzhou_nankang", "南康区", 25.654, 114.765),
    ("ganzhou_ganxian", "赣县区", 25.862, 115.018),
    ("ganzhou_xinfeng", "信丰县", 25.386, 114.934),
    ("ganzhou_dayu", "大余县", 25.395, 114.356),
    ("ganzhou_shangyou", "上犹县", 25.793, 114.540),
    ("ganzhou_chongyi", "崇义县", 25.681, 114.307),
    ("ganzhou_anyuan", "安远县", 25.135, 115.392),
    ("ganzhou_longnan", "龙南市", 24.912, 114.792),
    ("ganzhou_dingnan", "定南县", 24.784, 115.028),
    ("ganzhou_quannan", "全南县", 24.742, 114.531),
    ("ganzhou_ningdu", "宁都县", 26.477, 116.017),
    ("ganzhou_yudu", "于都县", 25.955, 115.417),
    ("ganzhou_xingguo", "兴国县", 26.321, 115.363),
    ("ganzhou_huichang", "会昌县", 25.600, 115.791),
    ("ganzhou_xunwu", "寻乌县", 24.960, 115.651),
    ("ganzhou_shicheng", "石城县", 26.326, 116.344),
    ("ganzhou_ruijin", "瑞金市", 25.885, 116.028),
    ("jian", "吉安市", 27.117, 114.971),
    ("jian_jizhou", "吉州区", 27.117, 114.993),
    ("jian_qingyuan", "青原区", 27.097, 114.962),
    ("jian_jianxian", "吉安县", 27.041, 114.907),
    ("jian_jishui", "吉水县", 27.213, 115.134),
    ("jian_xiajiang", "峡江县", 27.582, 115.322),
    ("jian_xingan", "新干县", 27.740, 115.399),
    ("jian_yongfeng", "永丰县", 27.317, 115.435),
    ("jian_taihe", "泰和县", 26.806, 114.909),
    ("jian_suichuan", "遂川县", 26.323, 114.516),
    ("jian_wanan", "万安县", 26.458, 114.786),
    ("jian_anfu", "安福县", 27.393, 114.620),
    ("jian_yongxin", "永新县", 26.944, 114.240),
    ("jian_jinggangshan", "井冈山市", 26.570, 114.165),
    ("yichun", "宜春市", 27.804, 114.383),
    ("yichun_yuanzhou", "袁州区", 27.809, 114.389),
    ("yichun_fengxin", "奉新县", 28.688, 115.389),
    ("yichun_wanzai", "万载县", 28.105, 114.444),
    ("yichun_shanggao", "上高县", 28.238, 114.933),
    ("yichun_yifeng", "宜丰县", 28.394, 114.787),
    ("yichun_jingan", "靖安县", 28.861, 115.361),
    ("yichun_tonggu", "铜鼓县", 28.525, 114.370),
    ("yichun_fengcheng", "丰城市", 28.159, 115.771),
    ("yichun_zhangshu", "樟树市", 28.055, 115.546),
    ("yichun_gaoan", "高安市", 28.420, 115.372),
    ("fuzhou", "抚州市", 27.951, 116.358),
    ("fuzhou_linchuan", "临川区", 27.946, 116.311),
    ("fuzhou_dongxiang", "东乡区", 28.236, 116.603),
    ("fuzhou_nancheng", "南城县", 27.558, 116.638),
    ("fuzhou_lichuan", "黎川县", 27.282, 116.907),
    ("fuzhou_nanfeng", "南丰县", 27.219, 116.531),
    ("fuzhou_chongren", "崇仁县", 27.760, 116.059),
    ("fuzhou_lean", "乐安县", 27.428, 115.830),
    ("fuzhou_yihuang", "宜黄县", 27.546, 116.236),
    ("fuzhou_jinxi", "金溪县", 27.918, 116.756),
    ("fuzhou_zixi", "资溪县", 27.706, 117.061),
    ("fuzhou_guangchang", "广昌县", 26.838, 116.335),
    ("shangrao", "上饶市", 28.444, 117.963),
    ("shangrao_xinzhou", "信州区", 28.431, 117.971),
    ("shangrao_guangfeng", "广丰区", 28.437, 118.196),
    ("shangrao_guangxin", "广信区", 28.448, 117.906),
    ("shangrao_yushan", "玉山县", 28.682, 118.244),
    ("shangrao_qianshan", "铅山县", 28.315, 117.711),
    ("shangrao_hengfeng", "横峰县", 28.407, 117.596),
    ("shangrao_yiyang", "弋阳县", 28.395, 117.449),
    ("shangrao_yugan", "余干县", 28.700, 116.695),
    ("shangrao_poyang", "鄱阳县", 29.008, 116.695),
    ("shangrao_wannian", "万年县", 28.707, 117.066),
    ("shangrao_wuyuan", "婺源县", 29.247, 117.861),
    ("shangrao_dexing", "德兴市", 28.947, 117.578),
];

static LOCATIONS: Lazy<Vec<Location>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|&(id, city, latitude, longitude)| Location {
            id,
            province: PROVINCE,
            city,
            latitude,
            longitude,
        })
        .collect()
});

static BY_ID: Lazy<HashMap<&'static str, &'static Location>> =
    Lazy::new(|| LOCATIONS.iter().map(|loc| (loc.id, loc)).collect());

/// Every catalog entry, stably sorted by (province, city) for display.
pub fn all_locations() -> Vec<&'static Location> {
    let mut locations: Vec<&'static Location> = LOCATIONS.iter().collect();
    locations.sort_by_key(|loc| (loc.province, loc.city));
    locations
}

/// Case-insensitive exact-match lookup. Empty input is a miss, not an error.
pub fn find_by_id(id: &str) -> Option<&'static Location> {
    if id.is_empty() {
        return None;
    }
    BY_ID.get(id.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_id() {
        let location = find_by_id("nanchang").unwrap();
        assert_eq!(location.province, "江西省");
        assert_eq!(location.city, "南昌市");
        assert!((location.latitude - 28.682).abs() < 1e-9);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = find_by_id("jiujiang_lushan").unwrap();
        let upper = find_by_id("Jiujiang_Lushan").unwrap();
        assert_eq!(lower.id, upper.id);
    }

    #[test]
    fn unknown_and_empty_ids_are_misses() {
        assert!(find_by_id("not_a_real_place").is_none());
        assert!(find_by_id("").is_none());
        assert!(find_by_id("nanchang ").is_none());
    }

    #[test]
    fn ids_are_unique() {
        assert_eq!(BY_ID.len(), CATALOG.len());
    }

    #[test]
    fn all_locations_sorted_by_province_and_city() {
        let locations = all_locations();
        assert_eq!(locations.len(), CATALOG.len());
        for pair in locations.windows(2) {
            assert!((pair[0].province, pair[0].city) <= (pair[1].province, pair[1].city));
        }
    }
}
