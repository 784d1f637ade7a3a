//! Tag template reference rows

use crate::model::TagCategory;

pub struct TagSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub category: TagCategory,
    pub color: &'static str,
    pub icon: &'static str,
}

macro_rules! tag {
    ($name:literal, $description:literal, $category:ident, $color:literal, $icon:literal) => {
        TagSeed {
            name: $name,
            description: $description,
            category: TagCategory::$category,
            color: $color,
            icon: $icon,
        }
    };
}

pub const TAG_TEMPLATES: &[TagSeed] = &[
    tag!("Pending", "Transaction or record is pending approval or processing", Status, "#F59E0B", "Clock"),
    tag!("Approved", "Transaction or record has been approved", Status, "#10B981", "Badge Check"),
    tag!("Rejected", "Transaction or record has been rejected", Status, "#EF4444", "Badge Minus"),
    tag!("Aborted", "Transaction or record was aborted during processing", Status, "#DC2626", "Stop"),
    tag!("Completed", "Transaction or record has been completed successfully", Status, "#059669", "Check Fill"),
    tag!("In Progress", "Transaction or record is currently being processed", Status, "#3B82F6", "Loading Spinner"),
    tag!("Warning", "Transaction or record requires attention or has warnings", Alert, "#F59E0B", "Warning"),
    tag!("High Priority", "High priority transaction or record requiring urgent attention", Priority, "#DC2626", "Badge Exclamation"),
    tag!("Medium Priority", "Medium priority transaction or record", Priority, "#F59E0B", "Badge Question"),
    tag!("Low Priority", "Low priority transaction or record", Priority, "#6B7280", "Info"),
    tag!("Cash Transaction", "Transaction involving cash payments or receipts", TransactionType, "#10B981", "Money Stack"),
    tag!("Bank Transfer", "Transaction processed through bank transfer", TransactionType, "#3B82F6", "Bank"),
    tag!("Credit Card", "Transaction processed via credit card", TransactionType, "#8B5CF6", "Credit Card"),
    tag!("Online Payment", "Transaction processed through online payment systems", TransactionType, "#06B6D4", "Online Payment"),
    tag!("Asset", "Account classified as an asset", AccountType, "#10B981", "Money Bag"),
    tag!("Liability", "Account classified as a liability", AccountType, "#EF4444", "Credit Card"),
    tag!("Equity", "Account classified as equity", AccountType, "#8B5CF6", "Pie Chart"),
    tag!("Revenue", "Account classified as revenue or income", AccountType, "#059669", "Trend Up"),
    tag!("Expense", "Account classified as an expense", AccountType, "#DC2626", "Trend Down"),
    tag!("Recurring", "Recurring transaction or scheduled entry", Special, "#06B6D4", "Refresh"),
    tag!("Adjustment", "Adjustment entry for corrections or modifications", Special, "#F59E0B", "Adjust"),
    tag!("Year End", "Year-end closing or adjustment entries", Special, "#6366F1", "Calendar"),
    tag!("Audit", "Entry related to audit requirements or adjustments", Special, "#7C2D12", "Shield Check"),
    tag!("Tax Related", "Transaction or entry related to tax calculations or payments", Special, "#991B1B", "Receipt"),
    tag!("Loan Related", "Transaction or entry related to loan processing or payments", Loan, "#7C2D12", "Hand Coins"),
    tag!("Interest", "Transaction involving interest calculations or payments", Calculation, "#0891B2", "Percent"),
    tag!("Fee", "Transaction involving service fees or charges", Calculation, "#BE185D", "Price Tag"),
    tag!("Member Savings", "Savings account transactions for cooperative members", Cooperative, "#16A34A", "Savings"),
    tag!("Share Capital", "Share capital contributions and transactions", Cooperative, "#0F766E", "Pie Chart"),
    tag!("Dividend Distribution", "Distribution of dividends to cooperative members", Cooperative, "#059669", "Hand Coins"),
    tag!("Patronage Refund", "Patronage refunds based on member usage", Cooperative, "#0D9488", "Money Trend"),
    tag!("Membership Fee", "Membership fees and registration costs", Cooperative, "#7C2D12", "User Tag"),
    tag!("Member Loan", "Loans provided to cooperative members", Loan, "#B45309", "Hand Deposit"),
    tag!("Agricultural Loan", "Specialized loans for agricultural purposes", Loan, "#65A30D", "Plant Growth"),
    tag!("Microfinance", "Small loans for micro-enterprises and small businesses", Loan, "#CA8A04", "Money Bag"),
    tag!("Emergency Loan", "Emergency loans for urgent member needs", Loan, "#DC2626", "Shield"),
    tag!("Educational Loan", "Loans for educational expenses and tuition", Loan, "#2563EB", "School"),
    tag!("Housing Loan", "Loans for housing and real estate purchases", Loan, "#7C3AED", "House"),
    tag!("Community Fund", "Contributions to community development funds", Community, "#0891B2", "People Group"),
    tag!("Social Responsibility", "Corporate social responsibility initiatives", Community, "#059669", "Hand Shake Heart"),
    tag!("Charity Donation", "Charitable donations and community support", Community, "#DB2777", "Hands Helping"),
    tag!("Educational Support", "Educational assistance and scholarship programs", Community, "#2563EB", "Graduation Cap"),
    tag!("Health Insurance", "Health insurance contributions and claims", Insurance, "#DC2626", "Shield Check"),
    tag!("Life Insurance", "Life insurance premiums and benefits", Insurance, "#7C2D12", "Shield"),
    tag!("Crop Insurance", "Agricultural crop insurance for farmers", Insurance, "#65A30D", "Plant Growth"),
    tag!("Board Resolution", "Transactions requiring board resolution approval", Governance, "#6366F1", "Users 3"),
    tag!("AGM Related", "Annual General Meeting related transactions", Governance, "#7C3AED", "Calendar Check"),
    tag!("Regulatory Compliance", "Compliance with regulatory requirements", Governance, "#991B1B", "Shield Exclamation"),
    tag!("Reserve Fund", "Transactions related to reserve fund allocations", Reserves, "#0F766E", "Wallet"),
    tag!("Capital Reserve", "Capital reserve fund transactions", Reserves, "#059669", "Money Stack"),
    tag!("Bad Debt Provision", "Provision for bad debts and loan losses", Reserves, "#DC2626", "Warning Circle"),
    tag!("Mobile Banking", "Transactions processed through mobile banking", Digital, "#0891B2", "Smartphone"),
    tag!("Online Banking", "Internet banking transactions and services", Digital, "#2563EB", "Globe"),
    tag!("ATM Transaction", "Automated Teller Machine transactions", Digital, "#7C3AED", "Monitor"),
    tag!("QR Payment", "QR code based payment transactions", Digital, "#059669", "QR Code"),
    tag!("New Member", "New member registration and onboarding", Membership, "#16A34A", "User Plus"),
    tag!("Member Withdrawal", "Member withdrawal from cooperative", Membership, "#DC2626", "Exit Door"),
    tag!("Death Benefit", "Death benefits and insurance claims", Insurance, "#374151", "Shield Fill"),
    tag!("Loan Collateral", "Collateral security for loan transactions", Security, "#92400E", "Shield Lock"),
    tag!("Guarantee", "Guarantee and surety related transactions", Security, "#0F766E", "User Shield"),
];
